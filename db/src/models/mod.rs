pub mod cohort;
pub mod student;
pub mod user;

pub use cohort::Entity as Cohort;
pub use student::Entity as Student;
pub use user::Entity as User;
