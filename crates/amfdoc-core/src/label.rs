//! Human readable type labels for data shapes.
//!
//! ```
//! use amfdoc_core::label::resolve_label;
//! use amfdoc_core::model::Shape;
//!
//! let list = Shape::array(Some(Shape::scalar("http://www.w3.org/2001/XMLSchema#string")));
//! assert_eq!(resolve_label(Some(&list), false).as_deref(), Some("List of String"));
//! ```

use crate::model::{NodeShape, Shape, ShapeKind};

/// Sentinel name AMF gives to object types declared inline.
const INLINE_TYPE_NAME: &str = "type";

/// Turn a data type URI into a label: the fragment after the last `#`
/// (or `/`) with its first character uppercased.
pub fn schema_to_type(value: &str) -> String {
    let start = value
        .rfind('#')
        .or_else(|| value.rfind('/'))
        .map_or(0, |index| index + 1);
    let fragment = &value[start..];
    let mut chars = fragment.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Compute the type label of a shape.
///
/// `is_array_item` is set when the shape is the `items` of an array. Returns
/// `None` when there is no shape, or for an array without items.
pub fn resolve_label(schema: Option<&Shape>, is_array_item: bool) -> Option<String> {
    let schema = schema?;
    match &schema.kind {
        ShapeKind::Scalar(scalar) => Some(schema_to_type(
            scalar.data_type.as_deref().unwrap_or_default(),
        )),
        ShapeKind::Array(array) => {
            let items = array.items.as_deref()?;
            let inner = resolve_label(Some(items), true).unwrap_or_default();
            Some(format!("List of {}", inner))
        }
        ShapeKind::Object(node) => {
            if is_array_item {
                if let Some(wrapped) = single_scalar_property(node) {
                    return resolve_label(Some(wrapped), false);
                }
            }
            let name = schema
                .name
                .as_deref()
                .filter(|n| !n.is_empty() && *n != INLINE_TYPE_NAME);
            Some(name.unwrap_or("Object").to_string())
        }
        ShapeKind::Union(union) => {
            let labels: Vec<String> = union
                .any_of
                .iter()
                .map(|member| resolve_label(Some(member), false).unwrap_or_default())
                .collect();
            Some(labels.join(" or "))
        }
        ShapeKind::File => Some("File".to_string()),
        ShapeKind::Unknown => Some("Unknown".to_string()),
    }
}

/// Some parsers wrap primitive array items in a synthetic object with one
/// scalar property; such an object is labelled as the scalar.
fn single_scalar_property(node: &NodeShape) -> Option<&Shape> {
    match node.properties.as_slice() {
        [property] => property.range.as_ref().filter(|range| range.is_scalar()),
        _ => None,
    }
}

impl Shape {
    /// Type label of the shape, see [`resolve_label`]
    pub fn type_label(&self) -> Option<String> {
        resolve_label(Some(self), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyShape;
    use crate::vocab::xsd;

    #[test]
    fn test_schema_to_type() {
        assert_eq!(schema_to_type(xsd::STRING), "String");
        assert_eq!(schema_to_type("http://a.ml/vocabularies/shapes/number"), "Number");
        assert_eq!(schema_to_type("boolean"), "Boolean");
        assert_eq!(schema_to_type(""), "");
        assert_eq!(schema_to_type("http://example.com/types#"), "");
    }

    #[test]
    fn test_missing_schema() {
        assert_eq!(resolve_label(None, false), None);
        assert_eq!(resolve_label(None, true), None);
    }

    #[test]
    fn test_scalar_label() {
        let shape = Shape::scalar(xsd::STRING);
        assert_eq!(shape.type_label().as_deref(), Some("String"));
    }

    #[test]
    fn test_scalar_without_data_type() {
        let shape = Shape::scalar("");
        assert_eq!(shape.type_label().as_deref(), Some(""));
        let mut shape = Shape::scalar(xsd::STRING);
        if let ShapeKind::Scalar(scalar) = &mut shape.kind {
            scalar.data_type = None;
        }
        assert_eq!(shape.type_label().as_deref(), Some(""));
    }

    #[test]
    fn test_array_label() {
        assert_eq!(Shape::array(None).type_label(), None);
        let list = Shape::array(Some(Shape::scalar(xsd::STRING)));
        assert_eq!(list.type_label().as_deref(), Some("List of String"));
        let nested = Shape::array(Some(Shape::array(Some(Shape::scalar(xsd::INTEGER)))));
        assert_eq!(nested.type_label().as_deref(), Some("List of List of Integer"));
    }

    #[test]
    fn test_object_label() {
        let named = Shape::object(Some("Order"), Vec::new());
        assert_eq!(named.type_label().as_deref(), Some("Order"));
        let anonymous = Shape::object(None, Vec::new());
        assert_eq!(anonymous.type_label().as_deref(), Some("Object"));
    }

    #[test]
    fn test_inline_type_name_is_suppressed() {
        let inline = Shape::object(Some("type"), Vec::new());
        assert_eq!(resolve_label(Some(&inline), false).as_deref(), Some("Object"));
        assert_eq!(resolve_label(Some(&inline), true).as_deref(), Some("Object"));
        let list = Shape::array(Some(inline));
        assert_eq!(list.type_label().as_deref(), Some("List of Object"));
    }

    #[test]
    fn test_wrapped_scalar_array_item() {
        let wrapper = Shape::object(
            Some("Wrapper"),
            vec![PropertyShape::new("value", Shape::scalar(xsd::INTEGER))],
        );
        assert_eq!(resolve_label(Some(&wrapper), true).as_deref(), Some("Integer"));
        assert_eq!(resolve_label(Some(&wrapper), false).as_deref(), Some("Wrapper"));
        let list = Shape::array(Some(wrapper));
        assert_eq!(list.type_label().as_deref(), Some("List of Integer"));
    }

    #[test]
    fn test_wrapper_requires_single_scalar_property() {
        let two = Shape::object(
            None,
            vec![
                PropertyShape::new("a", Shape::scalar(xsd::INTEGER)),
                PropertyShape::new("b", Shape::scalar(xsd::STRING)),
            ],
        );
        assert_eq!(resolve_label(Some(&two), true).as_deref(), Some("Object"));
        let nested = Shape::object(
            Some("Holder"),
            vec![PropertyShape::new("inner", Shape::object(None, Vec::new()))],
        );
        assert_eq!(resolve_label(Some(&nested), true).as_deref(), Some("Holder"));
    }

    #[test]
    fn test_union_label() {
        let union = Shape::union(vec![Shape::scalar(xsd::STRING), Shape::scalar(xsd::INTEGER)]);
        assert_eq!(union.type_label().as_deref(), Some("String or Integer"));
        let repeated = Shape::union(vec![Shape::scalar(xsd::STRING), Shape::scalar(xsd::STRING)]);
        assert_eq!(repeated.type_label().as_deref(), Some("String or String"));
    }

    #[test]
    fn test_unlabelled_union_member_leaves_empty_segment() {
        let union = Shape::union(vec![Shape::scalar(xsd::STRING), Shape::array(None)]);
        assert_eq!(union.type_label().as_deref(), Some("String or "));
    }

    #[test]
    fn test_union_members_are_not_array_items() {
        let wrapper = Shape::object(
            None,
            vec![PropertyShape::new("value", Shape::scalar(xsd::INTEGER))],
        );
        let list = Shape::array(Some(Shape::union(vec![wrapper, Shape::scalar(xsd::STRING)])));
        assert_eq!(list.type_label().as_deref(), Some("List of Object or String"));
    }

    #[test]
    fn test_file_and_unknown() {
        assert_eq!(Shape::new(ShapeKind::File).type_label().as_deref(), Some("File"));
        assert_eq!(
            Shape::new(ShapeKind::Unknown).type_label().as_deref(),
            Some("Unknown")
        );
    }

    #[test]
    fn test_resolving_twice_is_stable() {
        let shape = Shape::array(Some(Shape::union(vec![
            Shape::scalar(xsd::STRING),
            Shape::object(Some("Pet"), Vec::new()),
        ])));
        let first = shape.type_label();
        let second = shape.type_label();
        assert_eq!(first, second);
        assert_eq!(first.as_deref(), Some("List of String or Pet"));
    }
}
