mod dashboard;
pub use dashboard::Dashboard;

mod story;
pub use story::DataStory;
