//! Translation case catalog.
//!
//! Every case is an independent, read-only `(id, input, expected)` triple
//! checked by exact string comparison against what the page renders.
//! `Pos_` cases document correct transliterations; `Neg_` cases document
//! inputs the translator is known to mishandle.

use serde::Serialize;

/// Whether a case is expected to convert correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseKind {
	Positive,
	Negative,
}

/// Trust level of a case's expected output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum Fixture {
	Sound,
	/// Expected output cannot be produced from the input; skipped unless asked for.
	Suspect { reason: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
	pub id: &'static str,
	pub description: &'static str,
	pub input: &'static str,
	pub expected: &'static str,
	pub fixture: Fixture,
}

impl TestCase {
	pub fn kind(&self) -> CaseKind {
		if self.id.starts_with("Neg_") {
			CaseKind::Negative
		} else {
			CaseKind::Positive
		}
	}

	pub fn is_suspect(&self) -> bool {
		matches!(self.fixture, Fixture::Suspect { .. })
	}

	/// Case-insensitive substring match on id or description.
	pub fn matches(&self, needle: &str) -> bool {
		let needle = needle.to_lowercase();
		self.id.to_lowercase().contains(&needle) || self.description.to_lowercase().contains(&needle)
	}
}

const fn case(id: &'static str, description: &'static str, input: &'static str, expected: &'static str) -> TestCase {
	TestCase {
		id,
		description,
		input,
		expected,
		fixture: Fixture::Sound,
	}
}

const fn suspect(id: &'static str, description: &'static str, input: &'static str, expected: &'static str, reason: &'static str) -> TestCase {
	TestCase {
		id,
		description,
		input,
		expected,
		fixture: Fixture::Suspect { reason },
	}
}

static CATALOG: &[TestCase] = &[
	case("Pos_Fun_0001", "Convert a short daily phrase", "oyata asanipadha?", "ඔයට අසනිපද?"),
	case("Pos_Fun_0002", "Long mixed-language input with slang + typo causes incorrect conversion", "karuNaakaralaa mata podi udhavvak karanna puLuvandha?", "කරුණාකරලා මට පොඩි උදව්වක් කරන්න පුළුවන්ද?"),
	case("Pos_Fun_0003", "Convert a short request phrase", "suba dhavasak!", "සුබ දවසක්!"),
	case("Pos_Fun_0004", "Sinhala output updates automatically in real-time", "udata yanna.", "උඩට යන්න."),
	case("Pos_Fun_0005", "Compound sentence conversion", "api nuvara gihin passe galleth yanavaa.", "අපි නුවර ගිහින් පස්සෙ ගල්ලෙත් යනවා."),
	case("Pos_Fun_0006", "Complex conditional sentence", "gedhara yannata hadhanne", "ගෙදර යන්නට හදන්නෙ"),
	case("Pos_Fun_0007", "Repeated word expressions used for emphasis", "hari hari", "හරි හරි"),
	case("Pos_Fun_0008", "Convert positive sentence", "mama Eka karanavaa.", "මම එක කරනවා."),
	case("Pos_Fun_0009", "Negative sentence form", "  mama ehema karannee naehae.", "  මම එහෙම කරන්නේ නැහැ."),
	case("Pos_Fun_0010", "Polite request", "karunaakaralaa mata poddak ida dhenna puluvandha ?", "කරුනාකරලා මට පොඩ්ඩක් ඉඩ දෙන්න පුලුවන්ද ?"),
	case("Pos_Fun_0011", "Past tense sentence", "api iiyee udhee pansalata giyaa.", "අපි ඊයේ උදේ පන්සලට ගියා."),
	case("Pos_Fun_0012", "Pronoun plural usage", "Api sellam karanavaa.", "අපි සෙල්ලම් කරනවා."),
	case("Pos_Fun_0013", "Mixed English", "Apee team ekata  meeting ekak thiyenavaa.", "අපේ team එකට  meeting එකක් තියෙනවා."),
	case("Pos_Fun_0014", "Place name preserved", "api dhennaa kasaadhee USA vala gamu.", "අපි දෙන්නා කසාදේ USA වල ගමු."),
	case("Pos_Fun_0015", "Time format handling", "19.00 PM yamu", "19.00 PM යමු"),
	case("Pos_Fun_0016", "Currency format", "Rs.2500 dhenna", "Rs.2500 දෙන්න"),
	case("Pos_Fun_0017", "Question with English word", "photos tika send karaadhaa?", "photos ටික send කරාදා?"),
	case("Pos_Fun_0018", "Short confirmation response", "Ow,eka hoDHAyi.", "Ow,එක හොඳයි."),
	case("Pos_Fun_0019", "Informal phrasing", "yako ooka magee nemee.", "යකො ඕක මගේ නෙමේ."),
	case("Pos_Fun_0020", "Slang expression with punctuation", "niyamayi ban magen suba pethum !! dhennata", "නියමයි බන් මගෙන් සුබ පෙතුම් !! දෙන්නට"),
	case("Pos_Fun_0021", "Simple greeting phrase", "dhevi pihitayi!!", "දෙවි පිහිටයි!!"),
	case("Pos_Fun_0022", "Date format handling", "1/26/2026", "1/26/2026"),
	case("Pos_Fun_0023", "Common daily expression", "mata kammeli.", "මට කම්මෙලි."),
	case("Pos_Fun_0024", "Real-time output update", "iridhaata nimadu.", "ඉරිදාට නිමඩු."),
	case("Pos_Fun_0025", "technical term", "DATA ON karanna.", "DATA ON කරන්න."),
	case("Neg_Fun_0001", "Misspelled produces", "oyata kohomdha?", "ඔයාට කොහොමද?"),
	case("Neg_Fun_0002", "Multiple consecutive spaces", "m a m a i i y ee  id hal aa ka laa na e e  thavama mokuth ", "මම ඊයේ ඉදලා කලා නෑ තවම මොකුත්"),
	case("Neg_Fun_0003", "Question form incorrectly converted", "oyata saniipa madhidha", "ඔයට සනීප මදිද?"),
	case("Neg_Fun_0004", "Negative sentence with wrong negation pattern", "mama enna nehe", "මම එන්න නැහැ"),
	case("Neg_Fun_0005", "Incorrect handling of mixed language", "api eka e order eka cancel karala call ekak damu.", "අපි ඒ order එක cancel කරලා call එකක් දාමු."),
	case("Neg_Fun_0006", "Mixed uppercase and lowercase causes errors", "MaMa GeDhArA yAnAvAa. ", "මම ගෙදර යනවා. "),
	suspect(
		"Neg_Fun_0007",
		"Loss of accuracy in long conversational paragraph with mixed content",
		"adha udhae indhala mama bohoma busy unaa. office eke meeting thibunaeka passe client kenek call karalaa bohoma amathaka deyakata kathakaranna patan gaththa. mama eka note karaganna hithuwoth spellings hariyata balanna thiyenney nae. passe mama gedhara enakota traffic bohoma thibuna nisa late unaa.",
		"අද උදේ ඉදල මම බොහොම කාර්යබහුල උනා. office eke හමුවක් තිබුන එක පස්සෙ පරිබොගික කෙනෙක් call කරලා බොහොම අමතක දෙයකට කතා කරන්න පටන් ගත්ත. මම එක සටහන් කරගන්න හිතුවොත් අකුරු හරියට බලන්න තියෙන්නෙ නැ. පස්සෙ මම ගෙදර එනකොට වාහන තදබදය බොහොම තිබුන නිස පරක්කු උනා.",
		"expected output is a free-form rewrite, not a function of the input",
	),
	case("Neg_Fun_0008", "Compound sentence partially translated", "api eka iwara karannh thama hitiye eth beri una ", "අපි එක ඉවර කරන්න  තමා හිටියෙ එත් බැරි උනා "),
	case("Neg_Fun_0009", "Unsupported emoji input", "mama 😎 yanavaa", "මම යනවා."),
	suspect(
		"Neg_Fun_0010",
		"Pronoun perspective changed",
		"api passe kathaa karamu",
		"අපි ඔක්කොම නැන්දලාගෙ ගෙදර ගියොත් වැලේ තියෙන රෙදි ටික ගන්නෙ කව්ද?අපි පස්සේ කතා කරමු.",
		"expected output prepends a sentence absent from the input",
	),
	case("Neg_Fun_0011", "Special characters break the conversion", "mama @welata giya  #", "මම @වෙලට ගියා  #"),
];

pub fn catalog() -> &'static [TestCase] {
	CATALOG
}

/// Looks up a case by exact id.
pub fn find(id: &str) -> Option<&'static TestCase> {
	CATALOG.iter().find(|c| c.id == id)
}

/// Selection of catalog cases to run.
#[derive(Debug, Clone, Default)]
pub struct Selection {
	/// Exact ids; empty means every case.
	pub ids: Vec<String>,
	/// Substring filter on id or description.
	pub filter: Option<String>,
	pub include_suspect: bool,
}

/// A selected case and whether it will actually run.
#[derive(Debug, Clone, Copy)]
pub struct Planned {
	pub case: &'static TestCase,
	pub skip: bool,
}

impl Selection {
	/// Returns selected cases in catalog order; suspect cases are kept but
	/// marked skipped unless included.
	pub fn plan(&self) -> Vec<Planned> {
		CATALOG
			.iter()
			.filter(|c| self.ids.is_empty() || self.ids.iter().any(|id| id == c.id))
			.filter(|c| self.filter.as_deref().is_none_or(|f| c.matches(f)))
			.map(|case| Planned {
				case,
				skip: case.is_suspect() && !self.include_suspect,
			})
			.collect()
	}

	/// Ids that were asked for explicitly but are not in the catalog.
	pub fn unknown_ids(&self) -> Vec<&str> {
		self.ids.iter().map(String::as_str).filter(|id| find(id).is_none()).collect()
	}
}
