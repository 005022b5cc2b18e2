#![cfg(test)]

mod fakes;
mod provisioning;
