//! Mise en forme des différents modes de sortie.
use dephasage_thermique::cli::OutputMode;
use dephasage_thermique::i18n::{Language, Translator};
use dephasage_thermique::report::render;
use dephasage_thermique::thermal::{compute_thermal_profile, MaterialInput, ThermalProfile};
use pretty_assertions::assert_eq;

fn insulation() -> ThermalProfile {
    compute_thermal_profile(MaterialInput::new(0.04, 30.0, 0.021).with_thickness(0.2))
        .expect("profile")
}

#[test]
fn machine_format_uses_fixed_precision() {
    let out = render(&insulation(), OutputMode::Machine, &Translator::default()).unwrap();
    assert_eq!(out, "1 63.49 18.27 1.10");
}

#[test]
fn machine_format_brick() {
    let p = compute_thermal_profile(MaterialInput::new(0.84, 1800.0, 0.28).with_thickness(0.3))
        .unwrap();
    let out = render(&p, OutputMode::Machine, &Translator::default()).unwrap();
    assert_eq!(out, "504 1.67 2.96 10.14");
}

#[test]
fn single_value_modes_print_the_bare_number() {
    let p = insulation();
    let tr = Translator::default();
    let speed: f64 = render(&p, OutputMode::SpeedOnly, &tr).unwrap().parse().unwrap();
    let shift: f64 = render(&p, OutputMode::PhaseShiftOnly, &tr).unwrap().parse().unwrap();
    assert_eq!(speed, p.transfer_speed);
    assert_eq!(shift, p.phase_shift);
}

#[test]
fn french_report_layout() {
    let out = render(&insulation(), OutputMode::Report, &Translator::default()).unwrap();
    let expected = "\
Données entrées
\t        Conductivité:  0.04 W/m.°C
\t     Masse volumique:    30 kg/m3
\t  Chaleur specifique: 0.021 Wh/kg.°C
\t           Épaisseur:  0.20 m

Résultats
\t  Capacité thermique:     1 Wh/m3.°C
\t         Diffusivité: 63.49 10^-3 m2/h
\tVitesse de transfert: 18.27 cm/h
\t           Déphasage:  1.10 h";
    assert_eq!(out, expected);
}

#[test]
fn english_report_uses_the_same_layout() {
    let p = compute_thermal_profile(MaterialInput::new(0.84, 1800.0, 0.28).with_thickness(0.3))
        .unwrap();
    let out = render(&p, OutputMode::Report, &Translator::new(Language::En)).unwrap();
    let expected = "\
Input data
\t        Conductivity:  0.84 W/m.°C
\t             Density:  1800 kg/m3
\t       Specific heat: 0.280 Wh/kg.°C
\t           Thickness:  0.30 m

Results
\t    Thermal capacity:   504 Wh/m3.°C
\t         Diffusivity:  1.67 10^-3 m2/h
\t      Transfer speed:  2.96 cm/h
\t         Phase shift: 10.14 h";
    assert_eq!(out, expected);
}

#[test]
fn json_carries_inputs_and_results() {
    let p = insulation();
    let out = render(&p, OutputMode::Json, &Translator::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["thickness_m"].as_f64(), Some(0.2));
    assert_eq!(value["density_kg_per_m3"].as_f64(), Some(30.0));
    let shift = value["phase_shift_h"].as_f64().unwrap();
    assert!((shift - p.phase_shift).abs() < 1e-12);
    let d = value["diffusivity_m2_per_h"].as_f64().unwrap();
    assert!((d - p.diffusivity).abs() < 1e-12);
}
