use crate::error::ApiError;
use crate::transactions::dto::CreateTransactionRequest;
use crate::transactions::repo_types::{NewTransaction, TransactionKind};

const REQUIRED: &str = "user_id and type are required";

/// Human readable summary shown in the user's history.
pub fn describe(kind: TransactionKind, amount: Option<f64>, region: Option<&str>) -> String {
    match (kind, amount, region) {
        (TransactionKind::Topup, Some(amount), _) => format!("Пополнение Steam на сумму {}₽", amount),
        (TransactionKind::Topup, None, _) => "Пополнение Steam".to_string(),
        (TransactionKind::RegionChange, _, Some(region)) => format!("Смена региона на {}", region),
        (TransactionKind::RegionChange, _, None) => "Смена региона".to_string(),
    }
}

impl CreateTransactionRequest {
    pub fn validate(self) -> Result<NewTransaction, ApiError> {
        let user_id = self
            .user_id
            .filter(|id| *id != 0)
            .ok_or(ApiError::MissingField(REQUIRED))?;
        let kind = match self.kind.as_deref().map(str::trim) {
            None | Some("") => return Err(ApiError::MissingField(REQUIRED)),
            Some(raw) => raw.parse::<TransactionKind>().map_err(|_| {
                ApiError::BadRequest("type must be one of: topup, region_change".into())
            })?,
        };
        let region = self.region.filter(|r| !r.trim().is_empty());
        let description = describe(kind, self.amount, region.as_deref());

        Ok(NewTransaction {
            user_id,
            kind,
            amount: self.amount,
            steam_login: self.steam_login,
            region,
            description,
        })
    }
}
