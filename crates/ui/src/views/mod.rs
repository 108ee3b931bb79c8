mod quick_add;
mod quiz;
mod review;
mod scripts;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use quick_add::QuickAddLayer;
pub use quiz::QuizView;
pub use review::ReviewView;
