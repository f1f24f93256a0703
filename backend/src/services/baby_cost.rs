//! Baby cost estimator.
//!
//! Standard figures come from a [`PricingTable`] (TOML). A custom amount in
//! the request replaces the standard figure for its category; totals are
//! always computed from the effective figures.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::{
    BabyCostRequest, BabyCostResult, ChildcareType, CityTier, ClothingTier, DeliveryType,
    DiaperBrand, FeedingType, FormulaTier, GearTier, HealthType, HospitalType,
};
use crate::models::{TableError, ValidationError};

const TABLE_NAME: &str = "baby cost pricing";

const EMBEDDED_PRICING: &str = include_str!("../../data/baby_cost_pricing.toml");

/// Diaper usage is priced over a 30-day month.
pub const DAYS_PER_MONTH: f64 = 30.0;

pub const MAX_DIAPERS_PER_DAY: u32 = 12;

/// Upper bound for table prices and custom amounts, in rupees. Keeps every
/// rolled-up total finite.
pub const MAX_AMOUNT: f64 = 1.0e9;

#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Pricing(#[from] TableError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedingPrices {
    pub breastfeeding_monthly: f64,
    /// Share of a full formula budget used when feeding is mixed.
    pub mixed_formula_share: f64,
    pub formula: BTreeMap<FormulaTier, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HygienePrices {
    pub wipes_monthly: f64,
    /// Price of a single diaper.
    pub diaper_unit: BTreeMap<DiaperBrand, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearPrices {
    pub budget: f64,
    pub premium: f64,
}

impl GearPrices {
    pub fn price(&self, tier: GearTier) -> f64 {
        match tier {
            GearTier::Budget => self.budget,
            GearTier::Premium => self.premium,
        }
    }
}

/// Base prices in rupees before the city multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTable {
    pub toys_monthly: f64,
    pub city_multiplier: BTreeMap<CityTier, f64>,
    pub delivery: BTreeMap<HospitalType, BTreeMap<DeliveryType, f64>>,
    pub feeding: FeedingPrices,
    pub hygiene: HygienePrices,
    pub clothing: BTreeMap<ClothingTier, f64>,
    /// Yearly figures.
    pub healthcare: BTreeMap<HealthType, f64>,
    pub childcare: BTreeMap<ChildcareType, f64>,
    /// One-time prices keyed by gear item id.
    pub gear: BTreeMap<String, GearPrices>,
}

impl PricingTable {
    /// The sample table shipped with the crate.
    pub fn embedded() -> Result<Self, TableError> {
        Self::from_toml(EMBEDDED_PRICING)
    }

    pub fn from_toml(content: &str) -> Result<Self, TableError> {
        let table: PricingTable = toml::from_str(content).map_err(|e| TableError::Parse {
            table: TABLE_NAME,
            message: e.to_string(),
        })?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| TableError::Read {
            table: TABLE_NAME,
            message: format!("{}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml(&content)
    }

    /// Every category option must have a price so estimates never fail
    /// on a table lookup, and every price must be a sane amount.
    pub fn validate(&self) -> Result<(), TableError> {
        for city in CityTier::ALL {
            lookup(&self.city_multiplier, city, "city multiplier")?;
        }
        for hospital in HospitalType::ALL {
            let by_type = lookup(&self.delivery, hospital, "delivery")?;
            for delivery in DeliveryType::ALL {
                lookup(by_type, delivery, "delivery")?;
            }
        }
        for tier in FormulaTier::ALL {
            lookup(&self.feeding.formula, tier, "formula")?;
        }
        for brand in DiaperBrand::ALL {
            lookup(&self.hygiene.diaper_unit, brand, "diapers")?;
        }
        for tier in ClothingTier::ALL {
            lookup(&self.clothing, tier, "clothing")?;
        }
        for health in HealthType::ALL {
            lookup(&self.healthcare, health, "healthcare")?;
        }
        for childcare in ChildcareType::ALL {
            lookup(&self.childcare, childcare, "childcare")?;
        }
        self.check_prices()
    }

    fn check_prices(&self) -> Result<(), TableError> {
        check_price("toys_monthly", self.toys_monthly)?;
        check_price("feeding.breastfeeding_monthly", self.feeding.breastfeeding_monthly)?;
        check_price("feeding.mixed_formula_share", self.feeding.mixed_formula_share)?;
        check_price("hygiene.wipes_monthly", self.hygiene.wipes_monthly)?;
        check_prices_in("city multiplier", &self.city_multiplier)?;
        for (hospital, by_type) in &self.delivery {
            check_prices_in(&format!("delivery {:?}", hospital), by_type)?;
        }
        check_prices_in("formula", &self.feeding.formula)?;
        check_prices_in("diapers", &self.hygiene.diaper_unit)?;
        check_prices_in("clothing", &self.clothing)?;
        check_prices_in("healthcare", &self.healthcare)?;
        check_prices_in("childcare", &self.childcare)?;
        for (item, prices) in &self.gear {
            check_price(&format!("gear {} budget", item), prices.budget)?;
            check_price(&format!("gear {} premium", item), prices.premium)?;
        }
        Ok(())
    }

    pub fn gear_items(&self) -> impl Iterator<Item = &str> {
        self.gear.keys().map(String::as_str)
    }
}

fn check_price(entry: &str, value: f64) -> Result<(), TableError> {
    if is_amount(value) {
        Ok(())
    } else {
        Err(TableError::InvalidPrice {
            entry: entry.to_string(),
            value,
        })
    }
}

fn check_prices_in<K: Debug>(category: &str, prices: &BTreeMap<K, f64>) -> Result<(), TableError> {
    for (key, value) in prices {
        check_price(&format!("{} {:?}", category, key), *value)?;
    }
    Ok(())
}

fn is_amount(value: f64) -> bool {
    (0.0..=MAX_AMOUNT).contains(&value)
}

fn lookup<'a, K: Ord + Debug, V>(
    map: &'a BTreeMap<K, V>,
    key: K,
    category: &str,
) -> Result<&'a V, TableError> {
    map.get(&key)
        .ok_or_else(|| TableError::MissingPrice(format!("{} {:?}", category, key)))
}

/// Standard (uncustomized) figures for each category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardCosts {
    pub delivery: f64,
    pub feeding: f64,
    pub hygiene: f64,
    pub clothing: f64,
    pub health_yearly: f64,
    pub childcare: f64,
    pub gear: f64,
    pub toys: f64,
}

pub fn standard_costs(
    request: &BabyCostRequest,
    table: &PricingTable,
) -> Result<StandardCosts, EstimateError> {
    if request.diapers_per_day > MAX_DIAPERS_PER_DAY {
        return Err(ValidationError::DiapersPerDayOutOfRange {
            value: request.diapers_per_day,
            max: MAX_DIAPERS_PER_DAY,
        }
        .into());
    }

    let city = *lookup(&table.city_multiplier, request.city_tier, "city multiplier")?;

    let delivery = *lookup(
        lookup(&table.delivery, request.hospital_type, "delivery")?,
        request.delivery_type,
        "delivery",
    )?;

    let formula = *lookup(&table.feeding.formula, request.formula_tier, "formula")?;
    let feeding = match request.feeding_type {
        FeedingType::Breast => table.feeding.breastfeeding_monthly,
        FeedingType::Formula => formula,
        FeedingType::Mixed => {
            table.feeding.breastfeeding_monthly + formula * table.feeding.mixed_formula_share
        }
    };

    let diaper_unit = *lookup(&table.hygiene.diaper_unit, request.diaper_brand, "diapers")?;
    let wipes = if request.wipes_enabled {
        table.hygiene.wipes_monthly
    } else {
        0.0
    };
    let hygiene = f64::from(request.diapers_per_day) * DAYS_PER_MONTH * diaper_unit + wipes;

    let clothing = *lookup(&table.clothing, request.clothing_tier, "clothing")?;
    let health_yearly = *lookup(&table.healthcare, request.health_type, "healthcare")?;
    let childcare = *lookup(&table.childcare, request.childcare_type, "childcare")?;

    let mut gear = 0.0;
    for (item, tier) in &request.gear_selection {
        let prices = table
            .gear
            .get(item)
            .ok_or_else(|| ValidationError::UnknownGearItem(item.clone()))?;
        gear += prices.price(*tier);
    }

    Ok(StandardCosts {
        delivery: rupees(delivery * city),
        feeding: rupees(feeding * city),
        hygiene: rupees(hygiene * city),
        clothing: rupees(clothing * city),
        health_yearly: rupees(health_yearly * city),
        childcare: rupees(childcare * city),
        gear: rupees(gear * city),
        toys: rupees(table.toys_monthly * city),
    })
}

/// Compute the full breakdown with overrides applied and totals rolled up.
pub fn estimate(
    request: &BabyCostRequest,
    table: &PricingTable,
) -> Result<BabyCostResult, EstimateError> {
    let standard = standard_costs(request, table)?;

    let delivery = effective(
        "custom_delivery_cost",
        request.custom_delivery_cost,
        standard.delivery,
    )?;
    let feeding = effective(
        "custom_feeding_cost",
        request.custom_feeding_cost,
        standard.feeding,
    )?;
    let hygiene = effective(
        "custom_hygiene_cost",
        request.custom_hygiene_cost,
        standard.hygiene,
    )?;
    let clothing = effective(
        "custom_clothing_cost",
        request.custom_clothing_cost,
        standard.clothing,
    )?;
    let health_yearly = effective(
        "custom_health_cost",
        request.custom_health_cost,
        standard.health_yearly,
    )?;
    let childcare = effective(
        "custom_childcare_cost",
        request.custom_childcare_cost,
        standard.childcare,
    )?;
    let gear = effective("custom_gear_cost", request.custom_gear_cost, standard.gear)?;
    let toys = effective("custom_toy_cost", request.custom_toy_cost, standard.toys)?;

    let monthly_total =
        feeding + hygiene + clothing + childcare + toys + rupees(health_yearly / 12.0);
    let one_time = delivery + gear;

    log::debug!(
        "baby cost estimate city={:?} monthly_total={} one_time={}",
        request.city_tier,
        monthly_total,
        one_time
    );

    Ok(BabyCostResult {
        delivery,
        feeding,
        hygiene,
        clothing,
        health_yearly,
        childcare,
        gear,
        toys,
        standard_delivery: standard.delivery,
        standard_feeding: standard.feeding,
        standard_hygiene: standard.hygiene,
        standard_clothing: standard.clothing,
        standard_health_yearly: standard.health_yearly,
        standard_childcare: standard.childcare,
        standard_gear: standard.gear,
        standard_toys: standard.toys,
        monthly_total,
        first_year_total: monthly_total * 12.0 + one_time,
        one_time,
    })
}

fn effective(
    field: &'static str,
    custom: Option<f64>,
    standard: f64,
) -> Result<f64, ValidationError> {
    match custom {
        None => Ok(standard),
        Some(value) if is_amount(value) => Ok(value),
        Some(value) => Err(ValidationError::InvalidAmount {
            field,
            value,
            max: MAX_AMOUNT,
        }),
    }
}

/// Round to whole rupees.
fn rupees(amount: f64) -> f64 {
    amount.round()
}
