//! Domain constants for the BID bulletin.

/// Date handling shared by the export plan, the driver, and the prompts.
pub mod dates {
    /// The date format the site expects in queries and the CLI accepts,
    /// e.g. `29/04/2021`.
    pub const DATE_FORMAT: &str = "%d/%m/%Y";
}

/// Search form semantics.
pub mod search {
    /// Contract-type filter value meaning "all contract types".
    pub const ALL_CONTRACT_TYPES: &str = "TODOS";
}

/// Bulletin card labels, exactly as printed by the site.
///
/// Dispatch is byte-exact; no case folding or accent normalization.
pub mod labels {
    pub const REGISTRATION_ID: &str = "Inscrição";
    pub const CONTRACT_TYPE: &str = "Tipo Contrato";
    pub const START_DATE: &str = "Data inicio";
    pub const BIRTHDAY: &str = "Nascimento";
    pub const PUBLICATION_DATE: &str = "Data de Publicação";
}
