//! Annual income tax lookup.

use rust_decimal::Decimal;

use crate::config::TaxTable;

/// Calculates annual income tax under a progressive schedule.
///
/// The income is located in its bracket (upper bounds inclusive) and taxed
/// at the bracket's base tax plus its marginal rate on the excess over the
/// bracket's lower bound. Negative incomes are treated as zero.
///
/// # Examples
///
/// ```
/// use take_home_pay::calculation::calculate_tax;
/// use take_home_pay::config::TaxTable;
/// use rust_decimal::Decimal;
///
/// let table = TaxTable::default();
/// assert_eq!(calculate_tax(Decimal::from(18_200), &table), Decimal::ZERO);
/// assert_eq!(calculate_tax(Decimal::from(45_000), &table), Decimal::from(5_092));
/// assert_eq!(calculate_tax(Decimal::from(26_000), &table), Decimal::from(1_482));
/// ```
pub fn calculate_tax(annual_income: Decimal, table: &TaxTable) -> Decimal {
    let income = annual_income.max(Decimal::ZERO);
    let bracket = table.bracket_for(income);
    bracket.base_tax + (income - bracket.min_income) * bracket.rate
}
