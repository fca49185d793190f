pub mod profile;

pub use profile::{filled, Education, Experience, LanguageSkill, PersonalInfo, Profile, Skill};
