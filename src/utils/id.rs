use crate::constants::RACK_BOUNDARY_LENGTH;

/// Generates a multipart boundary made of random decimal digits.
///
/// The rack backend expects the numeric boundaries its web front-end
/// produces, so the alphabet is restricted to `0-9`.
///
/// # Examples
/// ```
/// use ent_client::utils::id::get_boundary;
/// let boundary = get_boundary();
/// assert_eq!(boundary.len(), 30);
/// assert!(boundary.chars().all(|c| c.is_ascii_digit()));
/// ```
pub fn get_boundary() -> String {
    get_boundary_with_length(RACK_BOUNDARY_LENGTH)
}

/// Same as [`get_boundary`] with a custom length
pub fn get_boundary_with_length(length: usize) -> String {
    let alphabet: Vec<char> = "0123456789".chars().collect();
    nanoid::nanoid!(length, &alphabet)
}
