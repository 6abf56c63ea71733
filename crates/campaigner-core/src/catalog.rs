//! Static catalogs offered by the campaign form
//!
//! Neither list is user-editable: roles are the fixed audience tags known to
//! the Mautic segment builder and states are the Brazilian federative units.

/// Roles a segment can target, in the order the form lists them.
pub const AVAILABLE_ROLES: &[&str] = &[
    "Admin",
    "Síndico",
    "Subsíndico",
    "Conselheiro",
    "Administradora",
    "Proprietário",
    "Inquilino",
    "Morador",
    "Zelador",
    "Porteiro",
    "Funcionário",
];

/// A Brazilian federative unit as shown by the state selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrazilianState {
    pub code: &'static str,
    pub name: &'static str,
}

const fn uf(code: &'static str, name: &'static str) -> BrazilianState {
    BrazilianState { code, name }
}

/// All 27 federative units, alphabetical by name.
pub const BRAZILIAN_STATES: &[BrazilianState] = &[
    uf("AC", "Acre"),
    uf("AL", "Alagoas"),
    uf("AP", "Amapá"),
    uf("AM", "Amazonas"),
    uf("BA", "Bahia"),
    uf("CE", "Ceará"),
    uf("DF", "Distrito Federal"),
    uf("ES", "Espírito Santo"),
    uf("GO", "Goiás"),
    uf("MA", "Maranhão"),
    uf("MT", "Mato Grosso"),
    uf("MS", "Mato Grosso do Sul"),
    uf("MG", "Minas Gerais"),
    uf("PA", "Pará"),
    uf("PB", "Paraíba"),
    uf("PR", "Paraná"),
    uf("PE", "Pernambuco"),
    uf("PI", "Piauí"),
    uf("RJ", "Rio de Janeiro"),
    uf("RN", "Rio Grande do Norte"),
    uf("RS", "Rio Grande do Sul"),
    uf("RO", "Rondônia"),
    uf("RR", "Roraima"),
    uf("SC", "Santa Catarina"),
    uf("SP", "São Paulo"),
    uf("SE", "Sergipe"),
    uf("TO", "Tocantins"),
];

/// Look up the display name for a state code (case-sensitive, e.g. `"SP"`).
pub fn state_name(code: &str) -> Option<&'static str> {
    BRAZILIAN_STATES
        .iter()
        .find(|state| state.code == code)
        .map(|state| state.name)
}

/// Whether `role` is part of [`AVAILABLE_ROLES`].
pub fn is_known_role(role: &str) -> bool {
    AVAILABLE_ROLES.contains(&role)
}
