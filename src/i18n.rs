//! Libellés du rapport lisible et messages d'erreur. Le français est la langue par défaut.

/// Clés des libellés.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";

    pub const HEADING_INPUTS: &str = "heading.inputs";
    pub const HEADING_RESULTS: &str = "heading.results";

    pub const LABEL_CONDUCTIVITY: &str = "label.conductivity";
    pub const LABEL_DENSITY: &str = "label.density";
    pub const LABEL_SPECIFIC_HEAT: &str = "label.specific_heat";
    pub const LABEL_THICKNESS: &str = "label.thickness";
    pub const LABEL_THERMAL_CAPACITY: &str = "label.thermal_capacity";
    pub const LABEL_DIFFUSIVITY: &str = "label.diffusivity";
    pub const LABEL_TRANSFER_SPEED: &str = "label.transfer_speed";
    pub const LABEL_PHASE_SHIFT: &str = "label.phase_shift";

    // Grandeurs citées dans les messages d'erreur.
    pub const FIELD_CONDUCTIVITY: &str = "field.conductivity";
    pub const FIELD_DENSITY: &str = "field.density";
    pub const FIELD_SPECIFIC_HEAT: &str = "field.specific_heat";
    pub const FIELD_THICKNESS: &str = "field.thickness";
    pub const FIELD_THERMAL_CAPACITY: &str = "field.thermal_capacity";
    pub const FIELD_DIFFUSIVITY: &str = "field.diffusivity";
    pub const FIELD_TRANSFER_SPEED: &str = "field.transfer_speed";
    pub const FIELD_PHASE_SHIFT: &str = "field.phase_shift";

    pub const ERROR_CONVERSION: &str = "error.conversion";
    pub const ERROR_DOMAIN: &str = "error.domain";
    pub const ERROR_OUTPUT: &str = "error.output";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_NON_FINITE_INPUT: &str = "error.non_finite_input";
    pub const ERROR_ZERO_CAPACITY: &str = "error.zero_capacity";
    pub const ERROR_ZERO_DIFFUSIVITY: &str = "error.zero_diffusivity";
    pub const ERROR_NEGATIVE_DIFFUSIVITY: &str = "error.negative_diffusivity";
    pub const ERROR_NON_FINITE_RESULT: &str = "error.non_finite_result";
    pub const ERROR_JSON: &str = "error.json";
    pub const ERROR_FORMAT: &str = "error.format";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    #[default]
    Fr,
    En,
}

#[derive(Debug, Clone, Default)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    pub fn new(lang: Language) -> Self {
        Self { lang }
    }

    /// Libellé traduit. Une clé absente en anglais retombe sur le français.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| fr(key)),
            Language::Fr => fr(key),
        }
    }

    /// Libellé traduit dont les `{nom}` sont remplacés par `vars`.
    pub fn fill(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(self.t(key), vars)
    }
}

fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

fn fr(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Erreur",
        HEADING_INPUTS => "Données entrées",
        HEADING_RESULTS => "Résultats",
        LABEL_CONDUCTIVITY => "Conductivité",
        LABEL_DENSITY => "Masse volumique",
        LABEL_SPECIFIC_HEAT => "Chaleur specifique",
        LABEL_THICKNESS => "Épaisseur",
        LABEL_THERMAL_CAPACITY => "Capacité thermique",
        LABEL_DIFFUSIVITY => "Diffusivité",
        LABEL_TRANSFER_SPEED => "Vitesse de transfert",
        LABEL_PHASE_SHIFT => "Déphasage",
        FIELD_CONDUCTIVITY => "conductivité",
        FIELD_DENSITY => "masse volumique",
        FIELD_SPECIFIC_HEAT => "chaleur spécifique",
        FIELD_THICKNESS => "épaisseur",
        FIELD_THERMAL_CAPACITY => "capacité thermique",
        FIELD_DIFFUSIVITY => "diffusivité",
        FIELD_TRANSFER_SPEED => "vitesse de transfert",
        FIELD_PHASE_SHIFT => "déphasage",
        ERROR_CONVERSION => "conversion numérique: {detail}",
        ERROR_DOMAIN => "erreur de domaine: {detail}",
        ERROR_OUTPUT => "sortie: {detail}",
        ERROR_INVALID_NUMBER => "{field}: « {raw} » n'est pas un nombre décimal valide",
        ERROR_NON_FINITE_INPUT => "{field}: « {raw} » n'est pas une valeur finie",
        ERROR_ZERO_CAPACITY => {
            "division par zéro : la capacité thermique (masse volumique × chaleur spécifique) est nulle"
        }
        ERROR_ZERO_DIFFUSIVITY => {
            "division par zéro : la diffusivité est nulle (conductivité nulle ?)"
        }
        ERROR_NEGATIVE_DIFFUSIVITY => {
            "racine carrée d'un nombre négatif : la diffusivité vaut {d} m2/h"
        }
        ERROR_NON_FINITE_RESULT => {
            "{quantity} hors des valeurs représentables ({value}) : dépassement de capacité"
        }
        ERROR_JSON => "sérialisation JSON impossible: {detail}",
        ERROR_FORMAT => "mise en forme impossible: {detail}",
        _ => "[traduction manquante]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        HEADING_INPUTS => "Input data",
        HEADING_RESULTS => "Results",
        LABEL_CONDUCTIVITY => "Conductivity",
        LABEL_DENSITY => "Density",
        LABEL_SPECIFIC_HEAT => "Specific heat",
        LABEL_THICKNESS => "Thickness",
        LABEL_THERMAL_CAPACITY => "Thermal capacity",
        LABEL_DIFFUSIVITY => "Diffusivity",
        LABEL_TRANSFER_SPEED => "Transfer speed",
        LABEL_PHASE_SHIFT => "Phase shift",
        FIELD_CONDUCTIVITY => "conductivity",
        FIELD_DENSITY => "density",
        FIELD_SPECIFIC_HEAT => "specific heat",
        FIELD_THICKNESS => "thickness",
        FIELD_THERMAL_CAPACITY => "thermal capacity",
        FIELD_DIFFUSIVITY => "diffusivity",
        FIELD_TRANSFER_SPEED => "transfer speed",
        FIELD_PHASE_SHIFT => "phase shift",
        ERROR_CONVERSION => "numeric conversion: {detail}",
        ERROR_DOMAIN => "domain error: {detail}",
        ERROR_OUTPUT => "output: {detail}",
        ERROR_INVALID_NUMBER => "{field}: \"{raw}\" is not a valid decimal number",
        ERROR_NON_FINITE_INPUT => "{field}: \"{raw}\" is not a finite value",
        ERROR_ZERO_CAPACITY => {
            "division by zero: thermal capacity (density × specific heat) is zero"
        }
        ERROR_ZERO_DIFFUSIVITY => "division by zero: diffusivity is zero (zero conductivity?)",
        ERROR_NEGATIVE_DIFFUSIVITY => {
            "square root of a negative number: diffusivity is {d} m2/h"
        }
        ERROR_NON_FINITE_RESULT => "{quantity} is out of representable range ({value}): overflow",
        ERROR_JSON => "JSON serialisation failed: {detail}",
        ERROR_FORMAT => "formatting failed: {detail}",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn french_is_the_default() {
        let tr = Translator::default();
        assert_eq!(tr.t(keys::LABEL_PHASE_SHIFT), "Déphasage");
    }

    #[test]
    fn english_labels_and_fallback() {
        let tr = Translator::new(Language::En);
        assert_eq!(tr.t(keys::HEADING_RESULTS), "Results");
        assert_eq!(tr.t("unknown.key"), "[traduction manquante]");
    }

    #[test]
    fn placeholders_are_filled() {
        let tr = Translator::new(Language::En);
        let msg = tr.fill(
            keys::ERROR_INVALID_NUMBER,
            &[("field", tr.t(keys::FIELD_DENSITY).into()), ("raw", "abc".into())],
        );
        assert_eq!(msg, "density: \"abc\" is not a valid decimal number");
    }
}
