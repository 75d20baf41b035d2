pub mod local_disk_store;
