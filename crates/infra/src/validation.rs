use climastore_checkout::{ShippingDetails, ShippingValidation, ShippingValidator, ShippingViolation};

/// Shipping validator that requires the fields a courier needs.
///
/// `name`, `line1`, `city`, `state` and `country` must be non-blank. Optional
/// address lines, zip and gift wrap are not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredFieldsValidator;

impl ShippingValidator for RequiredFieldsValidator {
    fn validate(&self, details: &ShippingDetails) -> ShippingValidation {
        let required = [
            ("name", details.name.as_str(), "Please enter a name"),
            ("line1", details.line1.as_str(), "Please enter the first address line"),
            ("city", details.city.as_str(), "Please enter a city name"),
            ("state", details.state.as_str(), "Please enter a state name"),
            ("country", details.country.as_str(), "Please enter a country name"),
        ];

        let violations = required
            .into_iter()
            .filter(|(_, value, _)| value.trim().is_empty())
            .map(|(field, _, message)| ShippingViolation::new(field, message))
            .collect();

        ShippingValidation::with_violations(violations)
    }
}
