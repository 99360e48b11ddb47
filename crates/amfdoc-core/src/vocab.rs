//! Vocabulary URIs of the AMF graph model used by the shape and value logic.

/// AMF data shapes vocabulary.
pub mod shapes {
    pub const SCALAR_SHAPE: &str = "http://a.ml/vocabularies/shapes#ScalarShape";
    pub const ARRAY_SHAPE: &str = "http://a.ml/vocabularies/shapes#ArrayShape";
    pub const UNION_SHAPE: &str = "http://a.ml/vocabularies/shapes#UnionShape";
    pub const FILE_SHAPE: &str = "http://a.ml/vocabularies/shapes#FileShape";
    pub const NUMBER: &str = "http://a.ml/vocabularies/shapes#number";
    pub const NIL: &str = "http://a.ml/vocabularies/shapes#nil";
    pub const DATE_TIME_ONLY: &str = "http://a.ml/vocabularies/shapes#dateTimeOnly";
}

/// W3C SHACL vocabulary.
pub mod shacl {
    pub const NODE_SHAPE: &str = "http://www.w3.org/ns/shacl#NodeShape";
}

/// XML schema data types.
pub mod xsd {
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const LONG: &str = "http://www.w3.org/2001/XMLSchema#long";
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
    pub const TIME: &str = "http://www.w3.org/2001/XMLSchema#time";
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
}
