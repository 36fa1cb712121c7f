pub mod games;
pub mod quarter_results;
pub mod squares;
pub mod user_codes;

pub use games::Entity as Games;
pub use games::Model as GameRow;
pub use quarter_results::Entity as QuarterResults;
pub use quarter_results::Model as QuarterResultRow;
pub use squares::Entity as Squares;
pub use squares::Model as SquareRow;
pub use user_codes::Entity as UserCodes;
pub use user_codes::Model as UserCode;
