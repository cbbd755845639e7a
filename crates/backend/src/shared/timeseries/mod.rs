pub mod windower;

pub use windower::window_series;
