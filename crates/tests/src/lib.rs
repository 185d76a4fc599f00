#[cfg(test)]
mod common;

#[cfg(test)]
mod fallback_listen_tests;

#[cfg(test)]
mod fallback_get_tests;

#[cfg(test)]
mod teardown_tests;

#[cfg(test)]
mod guard_tests;

#[cfg(test)]
mod role_tests;

#[cfg(test)]
mod timestamp_tests;
