mod integration;
mod stub;
