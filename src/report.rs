use crate::collector::SweepPoint;
use prettytable::{Table, row};

/// Print the coupon-collector sweep as a table, one row per k.
pub fn print_coupon_table(points: &[SweepPoint]) {
    let mut table = Table::new();
    table.add_row(row!["k", "n=2^k", "Average Coupons Needed"]);
    for point in points {
        table.add_row(row![point.k, point.n, format!("{:.1}", point.average)]);
    }

    println!("\nResults Table:");
    table.printstd();
}
