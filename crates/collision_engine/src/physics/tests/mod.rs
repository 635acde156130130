//! Scenario tests driving the full collision manager over several ticks
