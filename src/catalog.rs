//! Built-in dataset
//!
//! The franchise's films with their recorded budget and worldwide box office,
//! and the US annual inflation rates used to bring them to 2025 dollars.

use crate::models::{FilmRecord, InflationTable};

/// The twelve films, in entry order (not chronological)
pub fn film_catalog() -> Vec<FilmRecord> {
    vec![
        FilmRecord::new("A New Hope", 1977, 11e6, 775.398e6),
        FilmRecord::new("The Empire Strikes Back", 1980, 18e6, 550.016e6),
        FilmRecord::new("Return of the Jedi", 1983, 32.5e6, 482.466e6),
        FilmRecord::new("The Phantom Menace", 1999, 115e6, 1.0465e9),
        FilmRecord::new("Attack of the Clones", 2002, 115e6, 653.78e6),
        FilmRecord::new("Revenge of the Sith", 2005, 113e6, 905.596e6),
        FilmRecord::new("The Force Awakens", 2015, 447e6, 2.0713e9),
        FilmRecord::new("The Last Jedi", 2017, 300e6, 1.3344e9),
        FilmRecord::new("The Rise of Skywalker", 2019, 416e6, 1.0770e9),
        FilmRecord::new("Rogue One", 2016, 232e6, 1.0587e9),
        FilmRecord::new("Solo: A Star Wars Story", 2018, 275e6, 392.9248e6),
        FilmRecord::new("The Clone Wars", 2008, 8.5e6, 68.283e6),
    ]
}

/// Annual inflation rates (percent) for the release years and 2025
pub fn inflation_rates() -> InflationTable {
    [
        (1977, 5.1),
        (1980, 3.5),
        (1983, 3.2),
        (1999, 2.1),
        (2002, 2.3),
        (2005, 3.4),
        (2008, 3.8),
        (2015, 0.1),
        (2016, 1.0),
        (2017, 2.1),
        (2018, 2.4),
        (2019, 1.8),
        (2025, 2.5),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::REFERENCE_YEAR;

    #[test]
    fn test_catalog_size() {
        assert_eq!(film_catalog().len(), 12);
        assert_eq!(inflation_rates().len(), 13);
    }

    #[test]
    fn test_reference_year_present() {
        assert_eq!(inflation_rates().rate(REFERENCE_YEAR), Some(2.5));
    }

    #[test]
    fn test_every_release_year_has_a_rate() {
        let rates = inflation_rates();
        for film in film_catalog() {
            assert!(
                rates.rate(film.release_year).is_some(),
                "missing rate for {}",
                film.release_year
            );
        }
    }
}
