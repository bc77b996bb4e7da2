//! Error reporting tests
//!
//! Every condition maps onto its error kind and message, and failed operations leave the graph
//! usable and unchanged.
