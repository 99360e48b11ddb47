//! Ordering of an operation's responses and the status code shown first.

use std::cmp::Ordering;

use crate::model::Response;

fn status_number(response: &Response) -> Option<u16> {
    response.status_code.as_deref()?.trim().parse().ok()
}

/// Responses sorted by numeric status code. Codes that are not numbers
/// (`default`, `2XX`) go last, in declaration order.
pub fn sorted_responses(responses: &[Response]) -> Vec<&Response> {
    let mut sorted: Vec<&Response> = responses.iter().collect();
    sorted.sort_by(|a, b| match (status_number(a), status_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}

/// The status code to select: the current one when it still exists,
/// otherwise the first after sorting.
pub fn preselect_status(responses: &[Response], selected: Option<&str>) -> Option<String> {
    let sorted = sorted_responses(responses);
    if let Some(current) = selected {
        if sorted
            .iter()
            .any(|r| r.status_code.as_deref() == Some(current))
        {
            return Some(current.to_string());
        }
    }
    sorted.first().and_then(|r| r.status_code.clone())
}
