//! Country listing model.
//!
//! A [`Country`] is one row of the country selection screen: the display name,
//! the slug used to address per-country endpoints, and the ISO 3166-1 alpha-2
//! code when the API provides one.

/// A selectable country as listed by the countries endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    /// Display name, e.g. `"United States of America"`.
    pub name: String,

    /// Machine-friendly identifier, e.g. `"united-states"`.
    pub slug: String,

    /// Two-letter ISO code. Empty when the upstream omits it.
    pub iso2: String,
}

impl Country {
    /// Creates a country entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use zcovid::domain::Country;
    ///
    /// let france = Country::new("France", "france", "FR");
    /// assert_eq!(france.slug, "france");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, slug: impl Into<String>, iso2: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            iso2: iso2.into(),
        }
    }
}

/// Orders a country list alphabetically by display name.
///
/// The countries endpoint returns entries in no particular order; the list
/// screen always presents them sorted.
pub fn sort_by_name(countries: &mut [Country]) {
    countries.sort_by(|a, b| a.name.cmp(&b.name));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_by_name_orders_alphabetically() {
        let mut countries = vec![
            Country::new("Zambia", "zambia", "ZM"),
            Country::new("Austria", "austria", "AT"),
            Country::new("Kenya", "kenya", "KE"),
        ];

        sort_by_name(&mut countries);

        let names: Vec<&str> = countries.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Austria", "Kenya", "Zambia"]);
    }
}
