//! Turns a `Profile` into the ordered block sequence.
//!
//! Section order is fixed: header, summary, experience, education, skills,
//! languages, interests. Empty sections are skipped entirely; within the
//! experience and education sections, incomplete entries are skipped one by
//! one while the heading stays.

use crate::compose::blocks::Block;
use crate::i18n::{Language, Localizer};
use crate::models::{filled, Education, Experience, Profile};

/// Gap after the header (name + contact line).
pub const HEADER_GAP: f32 = 12.0;
/// Gap after each experience or education entry.
pub const ENTRY_GAP: f32 = 6.0;
/// Separator for the skills and languages lists.
pub const LIST_SEPARATOR: &str = " • ";

/// Composes the block sequence for `profile` with headings in `language`.
///
/// Pure and deterministic: identical inputs give an identical sequence.
pub fn compose(profile: &Profile, language: Language, labels: &Localizer) -> Vec<Block> {
    let mut blocks = Vec::new();
    push_header(profile, &mut blocks);

    let heading = |key: &str| Block::SectionHeading(labels.resolve(key, language).to_string());

    if let Some(summary) = filled(&profile.summary) {
        blocks.push(heading("professional_summary"));
        blocks.push(Block::BodyText(summary.to_string()));
    }

    if profile.experiences.iter().any(|e| !e.is_blank()) {
        blocks.push(heading("experience"));
        for exp in &profile.experiences {
            push_experience(exp, &mut blocks);
        }
    }

    if profile.education.iter().any(|e| !e.is_blank()) {
        blocks.push(heading("education"));
        for edu in &profile.education {
            push_education(edu, &mut blocks);
        }
    }

    if profile.skills.iter().any(|s| !s.is_blank()) {
        blocks.push(heading("skills"));
        let entries = profile.skills.iter().map(|s| (&s.name, &s.level));
        push_joined_list(entries, &mut blocks);
    }

    if profile.languages.iter().any(|l| !l.is_blank()) {
        blocks.push(heading("languages"));
        let entries = profile
            .languages
            .iter()
            .map(|l| (&l.name, &l.level));
        push_joined_list(entries, &mut blocks);
    }

    if let Some(interests) = filled(&profile.interests) {
        blocks.push(heading("interests"));
        blocks.push(Block::BodyText(interests.to_string()));
    }

    // The header gap on its own is not content.
    if matches!(blocks.as_slice(), [Block::Spacer(_)]) {
        blocks.clear();
    }
    blocks
}

fn push_header(profile: &Profile, blocks: &mut Vec<Block>) {
    let info = &profile.personal_info;
    if let Some(name) = filled(&info.name) {
        blocks.push(Block::Title(name.to_string()));
    }

    // Fixed order regardless of how the fields were filled in.
    let parts: Vec<String> = [&info.email, &info.phone, &info.address, &info.linkedin]
        .into_iter()
        .filter_map(|field| filled(field).map(str::to_string))
        .collect();
    if !parts.is_empty() {
        blocks.push(Block::ContactLine(parts));
    }

    blocks.push(Block::Spacer(HEADER_GAP));
}

fn push_experience(exp: &Experience, blocks: &mut Vec<Block>) {
    let (Some(title), Some(company)) = (filled(&exp.job_title), filled(&exp.company)) else {
        return;
    };

    let mut line = format!("{title} - {company}");
    if let (Some(start), Some(end)) = (filled(&exp.start_date), filled(&exp.end_date)) {
        line.push_str(&format!(" ({start} - {end})"));
    }
    blocks.push(Block::EmphasisLine(line));

    if let Some(description) = filled(&exp.description) {
        blocks.push(Block::BodyText(description.to_string()));
    }
    blocks.push(Block::Spacer(ENTRY_GAP));
}

fn push_education(edu: &Education, blocks: &mut Vec<Block>) {
    let (Some(degree), Some(institution)) = (filled(&edu.degree), filled(&edu.institution)) else {
        return;
    };

    let mut line = format!("{degree} - {institution}");
    if let Some(year) = filled(&edu.year) {
        line.push_str(&format!(" ({year})"));
    }
    blocks.push(Block::EmphasisLine(line));
    blocks.push(Block::Spacer(ENTRY_GAP));
}

/// Joins `name (level)` pairs in entry order, dropping entries without a name.
fn push_joined_list<'a>(
    entries: impl Iterator<Item = (&'a Option<String>, &'a Option<String>)>,
    blocks: &mut Vec<Block>,
) {
    let items: Vec<String> = entries
        .filter_map(|(name, level)| {
            let name = filled(name)?;
            Some(match filled(level) {
                Some(level) => format!("{name} ({level})"),
                None => name.to_string(),
            })
        })
        .collect();

    if !items.is_empty() {
        blocks.push(Block::BodyText(items.join(LIST_SEPARATOR)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LanguageSkill, PersonalInfo, Skill};

    fn labels() -> Localizer {
        Localizer::builtin().unwrap()
    }

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    fn experience(title: &str, company: &str) -> Experience {
        Experience {
            job_title: s(title),
            company: s(company),
            ..Default::default()
        }
    }

    // ── header ──────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_profile_composes_to_nothing() {
        let l10n = labels();
        for lang in Language::ALL {
            assert!(compose(&Profile::default(), lang, &l10n).is_empty());
        }
    }

    #[test]
    fn test_contact_line_uses_fixed_field_order() {
        let profile = Profile {
            personal_info: PersonalInfo {
                phone: s("555"),
                email: s("a@b.com"),
                ..Default::default()
            },
            ..Default::default()
        };
        let blocks = compose(&profile, Language::En, &labels());
        assert_eq!(
            blocks,
            vec![
                Block::ContactLine(vec!["a@b.com".to_string(), "555".to_string()]),
                Block::Spacer(HEADER_GAP),
            ]
        );
    }

    #[test]
    fn test_github_is_not_part_of_contact_line() {
        let profile = Profile {
            personal_info: PersonalInfo {
                name: s("Ada"),
                github: s("github.com/ada"),
                ..Default::default()
            },
            ..Default::default()
        };
        let blocks = compose(&profile, Language::En, &labels());
        assert_eq!(
            blocks,
            vec![Block::Title("Ada".to_string()), Block::Spacer(HEADER_GAP)]
        );
    }

    // ── sections ────────────────────────────────────────────────────────────

    #[test]
    fn test_summary_is_verbatim_and_heading_localized() {
        let profile = Profile {
            summary: s("Ingénieur systèmes."),
            ..Default::default()
        };
        let blocks = compose(&profile, Language::Nl, &labels());
        assert_eq!(
            blocks,
            vec![
                Block::Spacer(HEADER_GAP),
                Block::SectionHeading("Professionele Samenvatting".to_string()),
                Block::BodyText("Ingénieur systèmes.".to_string()),
            ]
        );
    }

    #[test]
    fn test_header_gap_leads_sections_without_header() {
        let profile = Profile {
            summary: s("Analyst."),
            ..Default::default()
        };
        let blocks = compose(&profile, Language::En, &labels());
        assert_eq!(blocks.first(), Some(&Block::Spacer(HEADER_GAP)));
        assert_eq!(blocks[1], Block::SectionHeading("Professional Summary".to_string()));
        assert_eq!(blocks.len(), 3);
    }

    #[test]
    fn test_incomplete_experience_is_skipped_and_order_kept() {
        let profile = Profile {
            experiences: vec![
                experience("Engineer", "Acme"),
                Experience {
                    job_title: s("Ghost"),
                    ..Default::default()
                },
                experience("Lead", "Globex"),
            ],
            ..Default::default()
        };
        let blocks = compose(&profile, Language::En, &labels());
        assert_eq!(
            blocks,
            vec![
                Block::Spacer(HEADER_GAP),
                Block::SectionHeading("Professional Experience".to_string()),
                Block::EmphasisLine("Engineer - Acme".to_string()),
                Block::Spacer(ENTRY_GAP),
                Block::EmphasisLine("Lead - Globex".to_string()),
                Block::Spacer(ENTRY_GAP),
            ]
        );
    }

    #[test]
    fn test_experience_dates_need_both_ends() {
        let mut with_both = experience("Engineer", "Acme");
        with_both.start_date = s("2019");
        with_both.end_date = s("2023");
        with_both.description = s("Built compilers.");
        let mut start_only = experience("Intern", "Acme");
        start_only.start_date = s("2018");

        let profile = Profile {
            experiences: vec![with_both, start_only],
            ..Default::default()
        };
        let blocks = compose(&profile, Language::Fr, &labels());
        assert_eq!(blocks[2], Block::EmphasisLine("Engineer - Acme (2019 - 2023)".to_string()));
        assert_eq!(blocks[3], Block::BodyText("Built compilers.".to_string()));
        assert_eq!(blocks[4], Block::Spacer(ENTRY_GAP));
        assert_eq!(blocks[5], Block::EmphasisLine("Intern - Acme".to_string()));
    }

    #[test]
    fn test_section_with_only_blank_entries_is_skipped() {
        let profile = Profile {
            experiences: vec![Experience::default(), Experience::default()],
            education: vec![Education {
                degree: s("  "),
                ..Default::default()
            }],
            skills: vec![Skill::default()],
            ..Default::default()
        };
        assert!(compose(&profile, Language::En, &labels()).is_empty());
    }

    #[test]
    fn test_heading_kept_when_entries_present_but_filtered() {
        let profile = Profile {
            education: vec![Education {
                degree: s("MSc"),
                year: s("2020"),
                ..Default::default()
            }],
            ..Default::default()
        };
        let blocks = compose(&profile, Language::En, &labels());
        assert_eq!(
            blocks,
            vec![
                Block::Spacer(HEADER_GAP),
                Block::SectionHeading("Education".to_string()),
            ]
        );
    }

    #[test]
    fn test_education_with_year() {
        let profile = Profile {
            education: vec![Education {
                degree: s("MSc Computer Science"),
                institution: s("KU Leuven"),
                year: s("2016"),
            }],
            ..Default::default()
        };
        let blocks = compose(&profile, Language::Nl, &labels());
        assert_eq!(
            blocks,
            vec![
                Block::Spacer(HEADER_GAP),
                Block::SectionHeading("Opleiding".to_string()),
                Block::EmphasisLine("MSc Computer Science - KU Leuven (2016)".to_string()),
                Block::Spacer(ENTRY_GAP),
            ]
        );
    }

    #[test]
    fn test_skills_joined_dropping_unnamed_entries() {
        let profile = Profile {
            skills: vec![
                Skill { name: s("Go"), level: s("Expert") },
                Skill { name: s(""), level: s("A1") },
                Skill { name: s("Rust"), level: s("Advanced") },
            ],
            ..Default::default()
        };
        let blocks = compose(&profile, Language::En, &labels());
        assert_eq!(
            blocks,
            vec![
                Block::Spacer(HEADER_GAP),
                Block::SectionHeading("Skills".to_string()),
                Block::BodyText("Go (Expert) • Rust (Advanced)".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_with_only_unnamed_entries_keeps_heading_only() {
        let profile = Profile {
            languages: vec![LanguageSkill { name: None, level: s("B2") }],
            ..Default::default()
        };
        let blocks = compose(&profile, Language::Fr, &labels());
        assert_eq!(
            blocks,
            vec![
                Block::Spacer(HEADER_GAP),
                Block::SectionHeading("Langues".to_string()),
            ]
        );
    }

    #[test]
    fn test_language_entry_without_level_renders_name_only() {
        let profile = Profile {
            languages: vec![
                LanguageSkill { name: s("Nederlands"), level: s("Native") },
                LanguageSkill { name: s("Deutsch"), level: None },
            ],
            ..Default::default()
        };
        let blocks = compose(&profile, Language::Nl, &labels());
        assert_eq!(
            blocks[2],
            Block::BodyText("Nederlands (Native) • Deutsch".to_string())
        );
    }

    #[test]
    fn test_full_profile_section_order() {
        let profile = Profile {
            personal_info: PersonalInfo {
                name: s("Ada Lovelace"),
                email: s("ada@example.com"),
                linkedin: s("linkedin.com/in/ada"),
                ..Default::default()
            },
            summary: s("Analyst."),
            experiences: vec![experience("Analyst", "Engine Co")],
            education: vec![Education {
                degree: s("Mathematics"),
                institution: s("Home"),
                year: None,
            }],
            skills: vec![Skill { name: s("Maths"), level: s("Expert") }],
            languages: vec![LanguageSkill { name: s("English"), level: s("Native") }],
            interests: s("Poetry"),
        };
        let blocks = compose(&profile, Language::En, &labels());
        let headings: Vec<&Block> = blocks
            .iter()
            .filter(|b| matches!(b, Block::SectionHeading(_)))
            .collect();
        assert_eq!(
            headings,
            vec![
                &Block::SectionHeading("Professional Summary".to_string()),
                &Block::SectionHeading("Professional Experience".to_string()),
                &Block::SectionHeading("Education".to_string()),
                &Block::SectionHeading("Skills".to_string()),
                &Block::SectionHeading("Languages".to_string()),
                &Block::SectionHeading("Interests".to_string()),
            ]
        );
        assert_eq!(blocks[0], Block::Title("Ada Lovelace".to_string()));
        assert_eq!(
            blocks[1],
            Block::ContactLine(vec![
                "ada@example.com".to_string(),
                "linkedin.com/in/ada".to_string()
            ])
        );
        assert_eq!(blocks.last(), Some(&Block::BodyText("Poetry".to_string())));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let profile = Profile {
            personal_info: PersonalInfo {
                name: s("Ada"),
                ..Default::default()
            },
            skills: vec![Skill { name: s("Maths"), level: s("Expert") }],
            ..Default::default()
        };
        let l10n = labels();
        assert_eq!(
            compose(&profile, Language::Fr, &l10n),
            compose(&profile, Language::Fr, &l10n)
        );
    }
}
