//! Built-in fixture list.

use jua_model::Company;

/// The default company list, used when no external source is configured.
pub fn companies() -> Vec<Company> {
    vec![
        Company {
            name: "Offgrid Africa".to_string(),
            location: "Dar es Salaam".to_string(),
            services: "Solar kits, lithium batteries, installations".to_string(),
            description: String::new(),
            phone: None,
            website: None,
        },
        Company {
            name: "Zanzibar Green Power".to_string(),
            location: "Zanzibar".to_string(),
            services: "Hotels, backup systems, tourism solar".to_string(),
            description: String::new(),
            phone: None,
            website: None,
        },
        Company {
            name: "Mwanza Sun Solutions".to_string(),
            location: "Mwanza".to_string(),
            services: "Water pumps, agri-solar systems".to_string(),
            description: String::new(),
            phone: None,
            website: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_records_are_valid() {
        let companies = companies();
        assert_eq!(companies.len(), 3);
        for company in &companies {
            assert!(company.validate().is_ok());
        }
    }
}
