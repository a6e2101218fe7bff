//! Compare the iterative engine with the closed-form compound identity
//! Test case: principal 1000, growth 7%, deduction 2% (5% net)

use finance_simulators::projection::project;

fn main() {
    let initial = 1000.0;
    let growth_rate = 0.07;
    let deduction_rate = 0.02;
    let periods = 30u32;
    let net_rate = growth_rate - deduction_rate;

    let series = project(initial, growth_rate, deduction_rate, periods);

    println!("Iterative vs closed-form comparison (1000 @ 7% gross, 2% deduction)");
    println!(
        "{:<8} {:<18} {:<18} {:<12} {:<18}",
        "Period", "Iterative", "ClosedForm", "Diff", "Reference"
    );

    // Reference balances computed independently in a spreadsheet at 5% net
    let reference_values = [
        (0, 1000.0),
        (1, 1050.0),
        (2, 1102.5),
        (5, 1276.2815625),
        (10, 1628.8946267774),
        (20, 2653.2977051444),
        (30, 4321.9423751507),
    ];

    for (period, reference) in reference_values.iter() {
        let iterative = series[*period as usize];
        let closed_form = initial * (1.0 + net_rate).powi(*period);
        let diff = iterative - closed_form;

        println!(
            "{:<8} {:<18.10} {:<18.10} {:<12.3e} {:<18.10}",
            period, iterative, closed_form, diff, reference
        );
    }
}
