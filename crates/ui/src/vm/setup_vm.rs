use quiz_core::model::{
    ALL_CATEGORIES_LABEL, CategoryFilter, OrderMode, QuestionCount, SessionParams, Year,
};

pub const ORDER_IN_SEQUENCE: &str = "in_order";
pub const ORDER_SHUFFLED: &str = "shuffled";

/// Form edits coming from the configurator, carrying raw input values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupIntent {
    SetStart(String),
    SetEnd(String),
    SetCategory(String),
    SetCount(String),
    SetOrder(String),
    SetKeyword(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOptionVm {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupVm {
    pub years: Vec<SelectOptionVm>,
    pub start: String,
    pub end: String,
    pub categories: Vec<SelectOptionVm>,
    pub category: String,
    pub count: u32,
    pub orders: Vec<SelectOptionVm>,
    pub order: &'static str,
    pub keyword: String,
}

#[must_use]
pub fn order_value(order: OrderMode) -> &'static str {
    match order {
        OrderMode::InOrder => ORDER_IN_SEQUENCE,
        OrderMode::Shuffled => ORDER_SHUFFLED,
    }
}

fn parse_order(raw: &str) -> Option<OrderMode> {
    match raw {
        ORDER_IN_SEQUENCE => Some(OrderMode::InOrder),
        ORDER_SHUFFLED => Some(OrderMode::Shuffled),
        _ => None,
    }
}

#[must_use]
pub fn map_setup(params: &SessionParams, years: &[Year], categories: &[String]) -> SetupVm {
    let years = years
        .iter()
        .map(|year| SelectOptionVm {
            value: year.to_string(),
            label: format!("{year}年"),
        })
        .collect();

    let categories = std::iter::once(ALL_CATEGORIES_LABEL)
        .chain(categories.iter().map(String::as_str))
        .map(|category| SelectOptionVm {
            value: category.to_string(),
            label: category.to_string(),
        })
        .collect();

    let orders = [OrderMode::InOrder, OrderMode::Shuffled]
        .into_iter()
        .map(|order| SelectOptionVm {
            value: order_value(order).to_string(),
            label: order.label().to_string(),
        })
        .collect();

    SetupVm {
        years,
        start: params.years.start().to_string(),
        end: params.years.end().to_string(),
        categories,
        category: params.category.label().to_string(),
        count: params.count.value(),
        orders,
        order: order_value(params.order),
        keyword: params.keyword.clone(),
    }
}

/// Apply a configurator edit. Returns `false` when the input was rejected.
///
/// Unparseable years, counts and orders leave the parameters unchanged.
pub fn apply_setup_intent(params: &mut SessionParams, intent: SetupIntent) -> bool {
    match intent {
        SetupIntent::SetStart(raw) => match raw.parse::<Year>() {
            Ok(year) => {
                params.years = params.years.with_start(year);
                true
            }
            Err(err) => {
                tracing::debug!(%raw, error = %err, "ignoring start year");
                false
            }
        },
        SetupIntent::SetEnd(raw) => match raw.parse::<Year>() {
            Ok(year) => {
                params.years = params.years.with_end(year);
                true
            }
            Err(err) => {
                tracing::debug!(%raw, error = %err, "ignoring end year");
                false
            }
        },
        SetupIntent::SetCategory(raw) => {
            params.category = CategoryFilter::from_label(&raw);
            true
        }
        SetupIntent::SetCount(raw) => match QuestionCount::parse_input(&raw) {
            Some(count) => {
                params.count = count;
                true
            }
            None => false,
        },
        SetupIntent::SetOrder(raw) => match parse_order(&raw) {
            Some(order) => {
                params.order = order;
                true
            }
            None => false,
        },
        SetupIntent::SetKeyword(raw) => {
            params.keyword = raw;
            true
        }
    }
}
