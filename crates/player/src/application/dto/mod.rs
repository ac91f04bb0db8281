//! Data transfer objects handed from the session to the layouts

mod sheet_view;

pub use sheet_view::{AbilityView, CoinView, ItemView, SheetView};
