//! Static label dictionaries, one `(key, label)` table per display language.
//!
//! Section keys come first; the rest are the data-entry surface's labels,
//! kept here so every consumer resolves through the same table.

pub(crate) const FR: &[(&str, &str)] = &[
    ("professional_summary", "Résumé professionnel"),
    ("experience", "Expérience professionnelle"),
    ("education", "Formation"),
    ("skills", "Compétences"),
    ("languages", "Langues"),
    ("interests", "Centres d'intérêt"),
    ("title", "Générateur de CV Intelligent"),
    ("subtitle", "Créez un CV professionnel optimisé ATS"),
    ("choose_template", "Choisir un modèle"),
    ("choose_language", "Langue du CV"),
    ("personal_info", "Informations personnelles"),
    ("name", "Nom complet"),
    ("email", "Email"),
    ("phone", "Téléphone"),
    ("address", "Adresse"),
    ("linkedin", "LinkedIn"),
    ("github", "GitHub"),
    ("job_title", "Poste"),
    ("company", "Entreprise"),
    ("start_date", "Date de début"),
    ("end_date", "Date de fin"),
    ("description", "Description"),
    ("degree", "Diplôme"),
    ("institution", "Institution"),
    ("year", "Année"),
    ("skill_name", "Compétence"),
    ("skill_level", "Niveau"),
    ("language_name", "Langue"),
    ("language_level", "Niveau"),
    ("preview", "Aperçu du CV"),
    ("generate_pdf", "Générer le PDF"),
    ("template_classic", "Classique"),
    ("template_modern", "Moderne"),
    ("template_creative", "Créatif"),
    ("language_fr", "Français"),
    ("language_en", "Anglais"),
    ("language_nl", "Néerlandais"),
];

pub(crate) const EN: &[(&str, &str)] = &[
    ("professional_summary", "Professional Summary"),
    ("experience", "Professional Experience"),
    ("education", "Education"),
    ("skills", "Skills"),
    ("languages", "Languages"),
    ("interests", "Interests"),
    ("title", "Intelligent CV Generator"),
    ("subtitle", "Create a professional ATS-optimized resume"),
    ("choose_template", "Choose Template"),
    ("choose_language", "CV Language"),
    ("personal_info", "Personal Information"),
    ("name", "Full Name"),
    ("email", "Email"),
    ("phone", "Phone"),
    ("address", "Address"),
    ("linkedin", "LinkedIn"),
    ("github", "GitHub"),
    ("job_title", "Job Title"),
    ("company", "Company"),
    ("start_date", "Start Date"),
    ("end_date", "End Date"),
    ("description", "Description"),
    ("degree", "Degree"),
    ("institution", "Institution"),
    ("year", "Year"),
    ("skill_name", "Skill"),
    ("skill_level", "Level"),
    ("language_name", "Language"),
    ("language_level", "Level"),
    ("preview", "CV Preview"),
    ("generate_pdf", "Generate PDF"),
    ("template_classic", "Classic"),
    ("template_modern", "Modern"),
    ("template_creative", "Creative"),
    ("language_fr", "French"),
    ("language_en", "English"),
    ("language_nl", "Dutch"),
];

pub(crate) const NL: &[(&str, &str)] = &[
    ("professional_summary", "Professionele Samenvatting"),
    ("experience", "Werkervaring"),
    ("education", "Opleiding"),
    ("skills", "Vaardigheden"),
    ("languages", "Talen"),
    ("interests", "Interesses"),
    ("title", "Intelligente CV Generator"),
    ("subtitle", "Maak een professionele ATS-geoptimaliseerde CV"),
    ("choose_template", "Kies Template"),
    ("choose_language", "CV Taal"),
    ("personal_info", "Persoonlijke Informatie"),
    ("name", "Volledige Naam"),
    ("email", "Email"),
    ("phone", "Telefoon"),
    ("address", "Adres"),
    ("linkedin", "LinkedIn"),
    ("github", "GitHub"),
    ("job_title", "Functie"),
    ("company", "Bedrijf"),
    ("start_date", "Startdatum"),
    ("end_date", "Einddatum"),
    ("description", "Beschrijving"),
    ("degree", "Diploma"),
    ("institution", "Instelling"),
    ("year", "Jaar"),
    ("skill_name", "Vaardigheid"),
    ("skill_level", "Niveau"),
    ("language_name", "Taal"),
    ("language_level", "Niveau"),
    ("preview", "CV Voorvertoning"),
    ("generate_pdf", "PDF Genereren"),
    ("template_classic", "Klassiek"),
    ("template_modern", "Modern"),
    ("template_creative", "Creatief"),
    ("language_fr", "Frans"),
    ("language_en", "Engels"),
    ("language_nl", "Nederlands"),
];
