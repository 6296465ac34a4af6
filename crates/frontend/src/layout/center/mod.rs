pub mod center;
pub mod tabs_bar;

pub use center::Center;
pub use tabs_bar::TabsBar;
