//! Rate and location value objects.
//!
//! These are the downstream shape packed [`Package`]s feed into: a
//! [`RateEstimate`] aggregates per-package rates between two [`Location`]s and
//! totals them through the same integer-cents boundary as everything else.

use crate::money::{cents_from, Money};
use crate::package::Package;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A shipping origin or destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// ISO 3166 country code.
    pub country: String,
    /// Province or state code.
    pub province: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// Postal or ZIP code.
    pub postal_code: Option<String>,
    /// First address line.
    pub address1: Option<String>,
    /// Residential rather than commercial address.
    pub residential: bool,
}

impl Location {
    /// Creates a location in the given country.
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..Self::default()
        }
    }

    /// Sets the province or state code.
    pub fn with_province(mut self, province: impl Into<String>) -> Self {
        self.province = Some(province.into());
        self
    }

    /// Sets the city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the postal code.
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    /// Sets the first address line.
    pub fn with_address1(mut self, address1: impl Into<String>) -> Self {
        self.address1 = Some(address1.into());
        self
    }

    /// Marks the address as residential.
    pub fn with_residential(mut self, residential: bool) -> Self {
        self.residential = residential;
        self
    }
}

/// One package together with the rate quoted for it, in integer cents.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackageRate {
    /// The quoted package.
    pub package: Package,
    /// The quoted rate in integer cents.
    pub rate: i64,
}

/// A carrier's quote for shipping a set of packages between two locations.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RateEstimate {
    origin: Location,
    destination: Location,
    carrier: String,
    service_name: String,
    currency: String,
    package_rates: Vec<PackageRate>,
    total: Option<i64>,
    delivery_days: Option<u32>,
}

impl RateEstimate {
    /// Creates an estimate with no package rates yet.
    pub fn new(
        origin: Location,
        destination: Location,
        carrier: impl Into<String>,
        service_name: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            origin,
            destination,
            carrier: carrier.into(),
            service_name: service_name.into(),
            currency: currency.into(),
            package_rates: Vec::new(),
            total: None,
            delivery_days: None,
        }
    }

    /// Adds a package and the rate quoted for it.
    pub fn add_package_rate(mut self, package: Package, rate: impl Into<Money>) -> Self {
        let rate = cents_from(Some(rate)).unwrap_or(0);
        self.package_rates.push(PackageRate { package, rate });
        self
    }

    /// Sets an explicit total, overriding the sum of package rates.
    pub fn with_total(mut self, total: impl Into<Money>) -> Self {
        self.total = cents_from(Some(total));
        self
    }

    /// Sets the estimated delivery time in days.
    pub fn with_delivery_days(mut self, days: u32) -> Self {
        self.delivery_days = Some(days);
        self
    }

    /// Shipping origin.
    pub fn origin(&self) -> &Location {
        &self.origin
    }

    /// Shipping destination.
    pub fn destination(&self) -> &Location {
        &self.destination
    }

    /// Carrier name.
    pub fn carrier(&self) -> &str {
        &self.carrier
    }

    /// Carrier service name.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// ISO currency code for all rates in this estimate.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Estimated delivery time in days.
    pub fn delivery_days(&self) -> Option<u32> {
        self.delivery_days
    }

    /// The per-package rates.
    pub fn package_rates(&self) -> &[PackageRate] {
        &self.package_rates
    }

    /// The quoted packages.
    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.package_rates.iter().map(|pr| &pr.package)
    }

    /// Number of quoted packages.
    pub fn package_count(&self) -> usize {
        self.package_rates.len()
    }

    /// Total price in integer cents: the explicit total if one was set,
    /// otherwise the sum of the package rates.
    pub fn total_price(&self) -> i64 {
        self.total
            .unwrap_or_else(|| self.package_rates.iter().map(|pr| pr.rate).sum())
    }
}
