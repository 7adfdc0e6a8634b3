pub mod sqlite_shift_repo;
pub mod sqlite_user_repo;
