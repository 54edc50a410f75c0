/// Advisory bounds for the numeric inputs. The browser enforces these as
/// `min`/`max` hints; nothing re-checks them before submission.
pub const YEAR_RANGE: (u32, u32) = (2023, 2026);
pub const MONTH_RANGE: (u32, u32) = (1, 12);
pub const DAY_RANGE: (u32, u32) = (1, 31);

/// One of the four inputs on the prediction form.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum FormField {
    Year,
    Month,
    Day,
    Model,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Year,
        FormField::Month,
        FormField::Day,
        FormField::Model,
    ];

    /// The HTML `name` attribute of the input.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Year => "year",
            FormField::Month => "month",
            FormField::Day => "day",
            FormField::Model => "model",
        }
    }

    pub fn from_name(name: &str) -> Option<FormField> {
        FormField::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Year => "Year",
            FormField::Month => "Month",
            FormField::Day => "Day",
            FormField::Model => "Select Model",
        }
    }

    /// `(min, max)` hint for numeric fields, `None` for the model selector.
    pub fn bounds(self) -> Option<(u32, u32)> {
        match self {
            FormField::Year => Some(YEAR_RANGE),
            FormField::Month => Some(MONTH_RANGE),
            FormField::Day => Some(DAY_RANGE),
            FormField::Model => None,
        }
    }
}

/// Raw mirror of the form inputs. Every field is kept as typed by the user.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct FormState {
    pub year: String,
    pub month: String,
    pub day: String,
    pub model: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Year => &self.year,
            FormField::Month => &self.month,
            FormField::Day => &self.day,
            FormField::Model => &self.model,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Year => self.year = value,
            FormField::Month => self.month = value,
            FormField::Day => self.day = value,
            FormField::Model => self.model = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// A model offered by the selector: the value sent to the service and its label.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ModelChoice {
    pub value: &'static str,
    pub label: &'static str,
}

/// Models served by the prediction backend, in selector order.
pub const MODEL_CHOICES: [ModelChoice; 12] = [
    ModelChoice { value: "CNN", label: "CNN" },
    ModelChoice { value: "CNN_Attention", label: "CNN + Attention" },
    ModelChoice { value: "RNN", label: "RNN" },
    ModelChoice { value: "RNN_Attention", label: "RNN + Attention" },
    ModelChoice { value: "GRU", label: "GRU" },
    ModelChoice { value: "GRU_Attention", label: "GRU + Attention" },
    ModelChoice { value: "LSTM", label: "LSTM" },
    ModelChoice { value: "LSTM_Attention", label: "LSTM + Attention" },
    ModelChoice { value: "ResNet", label: "ResNet" },
    ModelChoice { value: "ResNet_Attention", label: "ResNet + Attention" },
    ModelChoice { value: "ReXNet", label: "ReXNet" },
    ModelChoice { value: "ReXNet_Attention", label: "ReXNet + Attention" },
];
