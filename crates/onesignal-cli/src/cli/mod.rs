/*
[INPUT]:  Interactive terminal session
[OUTPUT]: Binary-only interactive helpers
[POS]:    CLI layer - interactive commands
[UPDATE]: When adding interactive commands
*/

pub mod init;
