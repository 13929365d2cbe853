use ent_client::utils::id::{get_boundary, get_boundary_with_length};

#[test]
fn test_boundary_is_numeric() {
    let boundary = get_boundary();
    assert_eq!(boundary.len(), 30);
    assert!(boundary.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_boundary_with_length() {
    assert_eq!(get_boundary_with_length(12).len(), 12);
}

#[test]
fn test_boundaries_differ() {
    assert_ne!(get_boundary(), get_boundary());
}
