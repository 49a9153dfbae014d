mod proc_stat;
mod snapshot;
