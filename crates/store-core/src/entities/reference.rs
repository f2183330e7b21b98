//! Static reference data - platforms and categories

/// Platform row from the reference table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub id: i32,
    pub name: String,
}

/// Category row from the reference table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}
