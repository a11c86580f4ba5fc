use serde::{Deserialize, Serialize};

/// Category keys of the financial section, grouped by what they total into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryKeys {
    /// Sources of funds; their total is the investment when no scalar is given
    #[serde(default = "default_financing_keys")]
    pub financing: Vec<String>,

    /// Income lines; their total is the projected revenue
    #[serde(default = "default_income_keys")]
    pub income: Vec<String>,

    /// Production costs
    #[serde(default = "default_cost_keys")]
    pub costs: Vec<String>,

    /// Operating expenses, added to costs for operational costs
    #[serde(default = "default_expense_keys")]
    pub expenses: Vec<String>,
}

impl Default for CategoryKeys {
    fn default() -> Self {
        Self {
            financing: default_financing_keys(),
            income: default_income_keys(),
            costs: default_cost_keys(),
            expenses: default_expense_keys(),
        }
    }
}

/// Group a financial category key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryGroup {
    Financing,
    Income,
    Costs,
    Expenses,
}

impl CategoryKeys {
    pub fn group_of(&self, key: &str) -> Option<CategoryGroup> {
        let contains = |keys: &[String]| keys.iter().any(|k| k == key);
        if contains(&self.financing) {
            Some(CategoryGroup::Financing)
        } else if contains(&self.income) {
            Some(CategoryGroup::Income)
        } else if contains(&self.costs) {
            Some(CategoryGroup::Costs)
        } else if contains(&self.expenses) {
            Some(CategoryGroup::Expenses)
        } else {
            None
        }
    }

    pub fn keys(&self, group: CategoryGroup) -> &[String] {
        match group {
            CategoryGroup::Financing => &self.financing,
            CategoryGroup::Income => &self.income,
            CategoryGroup::Costs => &self.costs,
            CategoryGroup::Expenses => &self.expenses,
        }
    }
}

fn to_owned(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

fn default_financing_keys() -> Vec<String> {
    to_owned(&[
        "capital",
        "ownCapital",
        "bankCredit",
        "loans",
        "investors",
        "grants",
        "otherFinancing",
    ])
}

fn default_income_keys() -> Vec<String> {
    to_owned(&[
        "salesServices",
        "salesProducts",
        "services",
        "products",
        "otherIncome",
    ])
}

fn default_cost_keys() -> Vec<String> {
    to_owned(&[
        "rawMaterials",
        "directLabor",
        "manufacturingCosts",
        "indirectCosts",
        "supplies",
    ])
}

fn default_expense_keys() -> Vec<String> {
    to_owned(&[
        "salaries",
        "administrativeExpenses",
        "salesExpenses",
        "rent",
        "utilities",
        "marketing",
        "otherExpenses",
    ])
}
