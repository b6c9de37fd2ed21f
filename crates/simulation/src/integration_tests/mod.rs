mod harness_bootstrap;
mod snapshot_tests;
