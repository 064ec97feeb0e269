//! Shared test harness modules for the Data Veda CLI.

use super::*;

mod helpers;
mod unit;
