//! NOS nomenclature catalog: resolves `(domain, key)` to a qualified [`MosCode`].

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::MosCode;

/// Version stamped on the builtin nomenclatures.
pub const BUILTIN_VERSION: &str = "2024-01";

/// Prefix of every nomenclature URN.
pub const URN_PREFIX: &str = "urn:mos:nos:";

/// Catalog errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown NOS domain '{0}'")]
    UnknownDomain(String),

    #[error("Code '{key}' not found in NOS domain '{domain}'")]
    UnknownCode { domain: String, key: String },

    #[error("Invalid catalog definition: {0}")]
    InvalidCatalog(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// One nomenclature entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NosEntry {
    pub code: String,
    pub label: String,
    pub nomenclature: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl NosEntry {
    pub fn urn(&self) -> String {
        format!("{URN_PREFIX}{}", self.nomenclature)
    }

    /// Expand into a fully qualified coded value.
    pub fn to_code(&self) -> MosCode {
        MosCode {
            value: self.code.clone(),
            label: Some(self.label.clone()),
            code_system_id: Some(self.nomenclature.clone()),
            code_system_name: Some(self.nomenclature.clone()),
            code_system_version: self.version.clone(),
            code_system_urn: Some(self.urn()),
            ..Default::default()
        }
    }
}

/// `(domain, key, code, label, nomenclature)`
const BUILTIN: &[(&str, &str, &str, &str, &str)] = &[
    ("civilite", "M", "M", "Monsieur", "TRE_R03-Civilite"),
    ("civilite", "F", "F", "Madame", "TRE_R03-Civilite"),
    ("sexe", "M", "M", "Masculin", "TRE_R02-Sexe"),
    ("sexe", "F", "F", "Féminin", "TRE_R02-Sexe"),
    ("sexe", "U", "U", "Inconnu", "TRE_R02-Sexe"),
    ("typeCarte", "CPS", "CPS", "Carte de professionnel de santé", "TRE_G10-TypeCarteCPS"),
    ("typeCarte", "CPE", "CPE", "Carte de personnel d'établissement", "TRE_G10-TypeCarteCPS"),
    ("usageCertificat", "AUTH", "AUTH", "Usage authentification", "TRE_G13-UsageCertificat"),
    ("usageCertificat", "SIGN", "SIGN", "Usage signature", "TRE_G13-UsageCertificat"),
    ("domaineCertificat", "Sante", "SANTE", "Domaine santé numérique", "TRE_G14-DomaineCertificat"),
    ("usageProfessionnel", "PRESC", "PRESC", "Prescription", "TRE_G11-UsageProfessionnel"),
    ("statutPublication", "PUB", "PUB", "Publié", "TRE_G15-StatutPublication"),
    ("discipline", "MED_GEN", "MED-GEN", "Médecine générale", "TRE_R84-Discipline"),
    ("roleProfessionnel", "MEDECIN", "MEDECIN", "Médecin", "TRE_R01-ProfessionSante"),
    ("roleProfessionnel", "PHARMACIEN", "PHARMACIEN", "Pharmacien", "TRE_R01-ProfessionSante"),
    ("roleProfessionnel", "INFIRMIER", "INFIRMIER", "Infirmier", "TRE_R01-ProfessionSante"),
    ("modeExercice", "LIBERAL", "LIB", "Exercice libéral", "TRE_R33-ModeExercice"),
    ("modeExercice", "SALARIE", "SAL", "Exercice salarié", "TRE_R33-ModeExercice"),
    ("habilitation", "AIDE_SOCIALE", "AIDE_SOCIALE", "Habilitation aide sociale", "TRE_R90-Habilitation"),
    ("modeFinancement", "CPAM", "CPAM", "Financement assurance maladie", "TRE_R91-ModeFinancement"),
];

/// English aliases accepted for the canonical domain names.
const DOMAIN_ALIASES: &[(&str, &str)] = &[
    ("civility", "civilite"),
    ("sex", "sexe"),
    ("card-type", "typeCarte"),
    ("certificate-usage", "usageCertificat"),
    ("certificate-domain", "domaineCertificat"),
    ("professional-usage", "usageProfessionnel"),
    ("publication-status", "statutPublication"),
    ("professional-role", "roleProfessionnel"),
    ("exercise-mode", "modeExercice"),
    ("social-habilitation", "habilitation"),
    ("financing-mode", "modeFinancement"),
];

fn canonical_domain(domain: &str) -> &str {
    DOMAIN_ALIASES
        .iter()
        .find(|(alias, _)| *alias == domain)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(domain)
}

/// Nomenclature entries grouped by domain, keyed by short key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NosCatalog {
    domains: BTreeMap<String, BTreeMap<String, NosEntry>>,
}

impl NosCatalog {
    /// The compiled-in catalog.
    pub fn builtin() -> &'static NosCatalog {
        static BUILTIN_CATALOG: OnceLock<NosCatalog> = OnceLock::new();
        BUILTIN_CATALOG.get_or_init(|| {
            let mut catalog = NosCatalog::default();
            for (domain, key, code, label, nomenclature) in BUILTIN {
                catalog.insert(
                    domain,
                    key,
                    NosEntry {
                        code: code.to_string(),
                        label: label.to_string(),
                        nomenclature: nomenclature.to_string(),
                        version: Some(BUILTIN_VERSION.to_string()),
                    },
                );
            }
            catalog
        })
    }

    /// Load a catalog from `{domain: {key: {code, label, nomenclature, version?}}}`.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let raw: BTreeMap<String, BTreeMap<String, NosEntry>> =
            serde_json::from_str(json).map_err(|e| CatalogError::InvalidCatalog(e.to_string()))?;
        let mut catalog = NosCatalog::default();
        for (domain, entries) in raw {
            for (key, entry) in entries {
                if entry.code.is_empty() {
                    return Err(CatalogError::InvalidCatalog(format!(
                        "entry '{key}' of domain '{domain}' has an empty code"
                    )));
                }
                catalog.insert(&domain, &key, entry);
            }
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, domain: &str, key: &str, entry: NosEntry) {
        self.domains
            .entry(canonical_domain(domain).to_string())
            .or_default()
            .insert(key.to_string(), entry);
    }

    /// Layer `other` over this catalog; its entries win on conflict.
    pub fn merge(&mut self, other: NosCatalog) {
        for (domain, entries) in other.domains {
            for (key, entry) in entries {
                self.insert(&domain, &key, entry);
            }
        }
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.domains.keys().map(String::as_str)
    }

    /// Entries of one domain, in key order.
    pub fn entries(&self, domain: &str) -> CatalogResult<impl Iterator<Item = (&str, &NosEntry)>> {
        let entries = self
            .domains
            .get(canonical_domain(domain))
            .ok_or_else(|| CatalogError::UnknownDomain(domain.to_string()))?;
        Ok(entries.iter().map(|(key, entry)| (key.as_str(), entry)))
    }

    pub fn get(&self, domain: &str, key: &str) -> CatalogResult<&NosEntry> {
        let entries = self
            .domains
            .get(canonical_domain(domain))
            .ok_or_else(|| CatalogError::UnknownDomain(domain.to_string()))?;
        entries.get(key).ok_or_else(|| CatalogError::UnknownCode {
            domain: domain.to_string(),
            key: key.to_string(),
        })
    }

    pub fn resolve(&self, domain: &str, key: &str) -> CatalogResult<MosCode> {
        self.get(domain, key).map(NosEntry::to_code)
    }

    pub fn len(&self) -> usize {
        self.domains.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolve a short key against the builtin catalog.
pub fn resolve_code(domain: &str, key: &str) -> CatalogResult<MosCode> {
    NosCatalog::builtin().resolve(domain, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_medecin() {
        let code = resolve_code("roleProfessionnel", "MEDECIN").unwrap();
        assert_eq!(code.value, "MEDECIN");
        assert_eq!(code.label.as_deref(), Some("Médecin"));
        assert_eq!(code.code_system_id.as_deref(), Some("TRE_R01-ProfessionSante"));
        assert_eq!(code.code_system_name.as_deref(), Some("TRE_R01-ProfessionSante"));
        assert_eq!(code.code_system_version.as_deref(), Some(BUILTIN_VERSION));
        assert_eq!(
            code.code_system_urn.as_deref(),
            Some("urn:mos:nos:TRE_R01-ProfessionSante")
        );
    }

    #[test]
    fn test_key_differs_from_code() {
        assert_eq!(resolve_code("modeExercice", "LIBERAL").unwrap().value, "LIB");
        assert_eq!(resolve_code("discipline", "MED_GEN").unwrap().value, "MED-GEN");
        assert_eq!(resolve_code("domaineCertificat", "Sante").unwrap().value, "SANTE");
    }

    #[test]
    fn test_alias_domain() {
        assert_eq!(
            resolve_code("sex", "F").unwrap(),
            resolve_code("sexe", "F").unwrap()
        );
        assert_eq!(resolve_code("exercise-mode", "LIBERAL").unwrap().value, "LIB");
    }

    #[test]
    fn test_unknown_domain() {
        let err = resolve_code("bloodType", "A").unwrap_err();
        assert_eq!(err, CatalogError::UnknownDomain("bloodType".to_string()));
        assert_eq!(err.to_string(), "Unknown NOS domain 'bloodType'");
    }

    #[test]
    fn test_unknown_code() {
        let err = resolve_code("sexe", "X").unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownCode {
                domain: "sexe".to_string(),
                key: "X".to_string()
            }
        );
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        assert!(resolve_code("domaineCertificat", "SANTE").is_err());
    }

    #[test]
    fn test_from_json_and_merge() {
        let extra = NosCatalog::from_json(
            r#"{
                "sexe": {"X": {"code": "X", "label": "Indéterminé", "nomenclature": "TRE_R02-Sexe"}},
                "langue": {"fr": {"code": "fr", "label": "Français", "nomenclature": "TRE_R245-Langue", "version": "2023-06"}}
            }"#,
        )
        .unwrap();
        assert_eq!(extra.len(), 2);

        let mut catalog = NosCatalog::builtin().clone();
        catalog.merge(extra);
        assert_eq!(catalog.resolve("sexe", "X").unwrap().label.as_deref(), Some("Indéterminé"));
        assert_eq!(catalog.resolve("sexe", "X").unwrap().code_system_version, None);
        assert_eq!(
            catalog.resolve("langue", "fr").unwrap().code_system_urn.as_deref(),
            Some("urn:mos:nos:TRE_R245-Langue")
        );
        assert!(catalog.resolve("sexe", "M").is_ok());
    }

    #[test]
    fn test_from_json_canonicalizes_aliases() {
        let catalog = NosCatalog::from_json(
            r#"{"sex": {"M": {"code": "M", "label": "Masculin", "nomenclature": "TRE_R02-Sexe"}}}"#,
        )
        .unwrap();
        assert_eq!(catalog.domains().collect::<Vec<_>>(), vec!["sexe"]);
    }

    #[test]
    fn test_from_json_rejects_empty_code() {
        let err = NosCatalog::from_json(
            r#"{"sexe": {"M": {"code": "", "label": "Masculin", "nomenclature": "TRE_R02-Sexe"}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCatalog(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            NosCatalog::from_json("[]"),
            Err(CatalogError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_entries_lists_domain() {
        let keys: Vec<&str> = NosCatalog::builtin()
            .entries("civility")
            .unwrap()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec!["F", "M"]);
    }
}
