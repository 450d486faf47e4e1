//! Type descriptor: pure data describing how a PostgreSQL type is named,
//! identified, and (for arrays) nested. No dispatch logic lives here — see
//! [`crate::encode`] and [`crate::decode`] for that.

/// Describes a PostgreSQL type for the purposes of binary encoding/decoding.
///
/// Built starting from [`TypeInfo::new`] and refined with the `with_*`
/// builders, each of which consumes `self` and returns a new value —
/// `TypeInfo` carries no interior mutability.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeInfo {
    pub oid: u32,
    pub name: String,
    pub typesend: String,
    pub typereceive: String,
    pub typelen: i32,
    pub output: String,
    pub input: String,
    pub elem_oid: u32,
    pub elem_type: Option<Box<TypeInfo>>,
    pub base_oid: u32,
    pub comp_oids: Vec<u32>,
    pub comp_types: Option<Vec<TypeInfo>>,
}

impl TypeInfo {
    /// Creates a descriptor for `oid` with every other field empty.
    pub fn new(oid: u32) -> Self {
        Self {
            oid,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_typesend(mut self, typesend: impl Into<String>) -> Self {
        self.typesend = typesend.into();
        self
    }

    pub fn with_typereceive(mut self, typereceive: impl Into<String>) -> Self {
        self.typereceive = typereceive.into();
        self
    }

    pub fn with_typelen(mut self, typelen: i32) -> Self {
        self.typelen = typelen;
        self
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_elem_oid(mut self, elem_oid: u32) -> Self {
        self.elem_oid = elem_oid;
        self
    }

    pub fn with_elem_type(mut self, elem_type: TypeInfo) -> Self {
        self.elem_type = Some(Box::new(elem_type));
        self
    }

    pub fn with_base_oid(mut self, base_oid: u32) -> Self {
        self.base_oid = base_oid;
        self
    }

    pub fn with_comp_oids(mut self, comp_oids: Vec<u32>) -> Self {
        self.comp_oids = comp_oids;
        self
    }

    pub fn with_comp_types(mut self, comp_types: Vec<TypeInfo>) -> Self {
        self.comp_types = Some(comp_types);
        self
    }

    /// Convenience constructor for a scalar type descriptor: OID, display
    /// name, and the `typsend`/`typreceive` pair.
    pub fn scalar(oid: u32, name: &str, typesend: &str, typereceive: &str) -> Self {
        Self::new(oid)
            .with_name(name)
            .with_typesend(typesend)
            .with_typereceive(typereceive)
    }

    /// Convenience constructor for an array descriptor over `elem`.
    pub fn array_of(oid: u32, name: &str, elem: TypeInfo) -> Self {
        Self::new(oid)
            .with_name(name)
            .with_typesend("array_send")
            .with_typereceive("array_recv")
            .with_elem_oid(elem.oid)
            .with_elem_type(elem)
    }
}
