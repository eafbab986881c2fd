//! Base commodity list for simulated mandi prices
//!
//! The fetch service turns each base entry into a PriceQuote by adding
//! random day-to-day jitter around `base_rs`.

/// One commodity with its usual modal price in rupees per quintal
#[derive(Debug, Clone, Copy)]
pub struct CommodityBase {
    pub name: &'static str,
    pub yard: &'static str,
    pub base_rs: u32,
}

static COMMODITIES: &[CommodityBase] = &[
    CommodityBase { name: "Tomato", yard: "Azadpur", base_rs: 1800 },
    CommodityBase { name: "Onion", yard: "Lasalgaon", base_rs: 2400 },
    CommodityBase { name: "Potato", yard: "Agra", base_rs: 1200 },
    CommodityBase { name: "Spinach", yard: "Azadpur", base_rs: 900 },
    CommodityBase { name: "Green Chilli", yard: "Guntur", base_rs: 4200 },
    CommodityBase { name: "Okra", yard: "Vashi", base_rs: 2100 },
    CommodityBase { name: "Cauliflower", yard: "Azadpur", base_rs: 1500 },
    CommodityBase { name: "Brinjal", yard: "Vashi", base_rs: 1600 },
];

/// The full base commodity table
pub fn commodities() -> &'static [CommodityBase] {
    COMMODITIES
}
