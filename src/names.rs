use rand::Rng;
use rand::RngCore;

const PRAENOMINA: &[&str] = &[
    "Agrippa", "Appius", "Aulus", "Bigus", "Caeso", "Decimus", "Faustus",
    "Gaius", "Gnaeus", "Hostus", "Lucius", "Mamercus", "Manius", "Marcus",
    "Mettius", "Nonus", "Numerius", "Octavius", "Opiter", "Paullus",
    "Postumus", "Proculus", "Publius", "Quintus", "Septimus", "Sertor",
    "Servius", "Sextus", "Spurius", "Statius", "Tiberius", "Titus",
    "Tullus", "Vibius", "Volesus", "Vopiscus",
];

const NOMINA: &[&str] = &[
    "Julius", "Fabius", "Sempronius", "Verginius", "Valerius", "Horatius",
    "Junius", "Excretius", "Excrutius", "Marius", "Lichius", "Flugblogius",
    "Gracchus", "Furius", "Dickus",
];

/// Generate a random Roman name (praenomen + nomen).
pub fn generate_roman_name(rng: &mut dyn RngCore) -> String {
    let praenomen = PRAENOMINA[rng.random_range(0..PRAENOMINA.len())];
    let nomen = NOMINA[rng.random_range(0..NOMINA.len())];
    format!("{praenomen} {nomen}")
}
