pub mod group_by;
