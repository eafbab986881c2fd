//! Static mock datasets
//!
//! Every table here is inlined display content; nothing is fetched or
//! persisted. The fetch service samples these tables and adds jitter to
//! simulate a live backend.

mod commodities;
mod festivals;
mod gardeners;
mod plants;
mod tips;

pub use commodities::{commodities, CommodityBase};
pub use festivals::festivals;
pub use gardeners::gardeners;
pub use plants::plants;
pub use tips::{care_tip_for, suggestion_for_light};
