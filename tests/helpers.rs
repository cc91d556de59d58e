// Shared test helpers for building snapshot documents.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::{Path, PathBuf};

use serde_json::{json, Value};

/// A fetched snapshot as the upstream fetcher writes it: facts and colors unset.
#[allow(dead_code)] // Used by other test files
pub fn fetched_snapshot() -> Value {
    json!({
        "generatedAt": "2025-01-10T08:00:00.000Z",
        "total": 6,
        "results": [
            fetched("Stati Uniti", "USA", "US",
                Some("Non è necessario il visto per soggiorni fino a 90 giorni, ma occorre l'autorizzazione ESTA."),
                Some("Nessuna vaccinazione obbligatoria.")),
            fetched("Kenya", "KEN", "KE",
                Some("È necessario il visto, ottenibile come eVisa."),
                Some("Vaccinazione contro la febbre gialla obbligatoria.")),
            fetched("Francia", "FRA", "FR",
                Some("Ingresso senza visto con carta d'identità."),
                Some("Vaccinazioni non obbligatorie, ma consigliate.")),
            fetched("Sri Lanka", "LKA", "LK",
                Some("Prima della partenza occorre l'autorizzazione elettronica (ETA)."),
                Some("Vaccinazione contro la febbre gialla obbligatoria per chi proviene da zone a rischio.")),
            fetched("Australia", "AUS", "AU",
                Some("Passaporto con validità residua di sei mesi."),
                None),
            {
                "country": "Corea del Nord",
                "cca3": "PRK",
                "error": "HTTP 404"
            }
        ]
    })
}

/// One record in fetcher form.
#[allow(dead_code)]
pub fn fetched(
    country: &str,
    cca3: &str,
    cca2: &str,
    visa_text: Option<&str>,
    health_text: Option<&str>,
) -> Value {
    json!({
        "country": country,
        "cca3": cca3,
        "cca2": cca2,
        "source": format!("https://www.viaggiaresicuri.it/schede_paese/{}.json", cca3),
        "visaText": visa_text,
        "healthText": health_text,
        "extracted": {
            "visaRequired": null,
            "visaFreeDays": null,
            "eAuthorizationRequired": null,
            "vaccinesRequired": null
        },
        "color": null,
        "fetchedAt": "2025-01-10T08:00:00.000Z"
    })
}

/// Writes a JSON document into `dir` and returns its path.
#[allow(dead_code)]
pub fn write_document(dir: &Path, name: &str, document: &Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(document).unwrap())
        .expect("Failed to write test document");
    path
}

/// Reads a JSON document back.
#[allow(dead_code)]
pub fn read_document(path: &Path) -> Value {
    let raw = std::fs::read_to_string(path).expect("Failed to read output document");
    serde_json::from_str(&raw).expect("Output is not valid JSON")
}

/// Finds a record by `cca3`.
#[allow(dead_code)]
pub fn record<'a>(document: &'a Value, cca3: &str) -> &'a Value {
    document["results"]
        .as_array()
        .and_then(|results| results.iter().find(|r| r["cca3"] == cca3))
        .unwrap_or_else(|| panic!("no record {}", cca3))
}
