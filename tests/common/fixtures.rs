use serde_json::{json, Value};

pub fn contact(id: &str) -> Value {
    json!({
        "id": id,
        "entity": "contact",
        "name": "Gaurav Kumar",
        "contact": "9123456789",
        "email": "gaurav.kumar@example.com",
        "type": "employee",
        "reference_id": "Acme Contact ID 12345",
        "batch_id": null,
        "active": true,
        "notes": {
            "notes_key_1": "Tea, Earl Grey, Hot",
            "notes_key_2": "Tea, Earl Grey… decaf."
        },
        "created_at": 1545320320
    })
}

pub fn bank_account_fund_account(id: &str, contact_id: &str) -> Value {
    json!({
        "id": id,
        "entity": "fund_account",
        "contact_id": contact_id,
        "account_type": "bank_account",
        "bank_account": {
            "ifsc": "HDFC0000053",
            "bank_name": "HDFC Bank",
            "name": "Gaurav Kumar",
            "notes": [],
            "account_number": "765432123456789"
        },
        "active": true,
        "batch_id": null,
        "created_at": 1543650891
    })
}

pub fn payout(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "entity": "payout",
        "fund_account_id": "fa_00000000000001",
        "amount": 1000000,
        "currency": "INR",
        "notes": [],
        "fees": 590,
        "tax": 90,
        "status": status,
        "utr": null,
        "mode": "IMPS",
        "purpose": "refund",
        "reference_id": "Acme Transaction ID 12345",
        "narration": "Acme Corp Fund Transfer",
        "batch_id": null,
        "failure_reason": null,
        "created_at": 1545383037
    })
}

pub fn payout_link(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "entity": "payout_link",
        "contact_id": "cont_00000000000001",
        "contact": {
            "name": "Gaurav Kumar",
            "email": "gaurav.kumar@example.com",
            "contact": "912313213210"
        },
        "fund_account_id": null,
        "payout_id": null,
        "purpose": "refund",
        "status": status,
        "amount": 1000,
        "currency": "INR",
        "description": "Payout link for Gaurav Kumar",
        "attempt_count": 0,
        "receipt": "Receipt No. 1",
        "notes": [],
        "short_url": "https://rzp.io/i/3b1Bw2a",
        "send_sms": true,
        "send_email": true,
        "created_at": 1592223400,
        "cancelled_at": null,
        "expire_by": null,
        "expired_at": null
    })
}

pub fn transaction(id: &str) -> Value {
    json!({
        "id": id,
        "entity": "transaction",
        "account_number": "7878780080316316",
        "amount": 1000000,
        "currency": "INR",
        "credit": 0,
        "debit": 1000000,
        "balance": 4000000,
        "source": {
            "id": "pout_00000000000001",
            "entity": "payout",
            "fund_account_id": "fa_00000000000001",
            "amount": 1000000,
            "notes": [],
            "mode": "IMPS",
            "utr": "933815233814"
        },
        "created_at": 1545320320
    })
}

pub fn collection(items: Vec<Value>) -> Value {
    json!({
        "entity": "collection",
        "count": items.len(),
        "items": items
    })
}
