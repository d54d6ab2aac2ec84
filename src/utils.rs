// SPDX-License-Identifier: GPL-3.0-only

mod error;

pub use error::CatalogueError;

/// Transforms a kebab-case string into a space-separated string where each word starts with an uppercase letter.
pub fn capitalize_string(input: &str) -> String {
    input
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            if let Some(first_char) = chars.next() {
                first_char.to_uppercase().collect::<String>() + chars.as_str()
            } else {
                String::new()
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Helper to scale some data from PokeApi such as weight...
/// scales a number down by dividing it by 10, converting it to a floating-point
pub fn scale_numbers(num: u32) -> f64 {
    f64::from(num) / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_kebab_case_names() {
        assert_eq!(capitalize_string("mr-mime"), "Mr Mime");
        assert_eq!(capitalize_string("pikachu"), "Pikachu");
        assert_eq!(capitalize_string(""), "");
    }

    #[test]
    fn scales_decigrams_and_decimeters() {
        assert_eq!(scale_numbers(69), 6.9);
        assert_eq!(scale_numbers(17), 1.7);
        assert_eq!(scale_numbers(0), 0.0);
    }
}
