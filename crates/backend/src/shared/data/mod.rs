pub mod db;
pub mod etl_tables;
