pub mod app;
pub mod climate_chart;
pub mod ending_screen;
pub mod lives_display;
pub mod plant_view;
pub mod question_screen;
pub mod result_screen;
pub mod rule_screen;
pub mod title_screen;
pub mod transition_screen;
