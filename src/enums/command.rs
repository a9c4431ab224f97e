use clap::Subcommand;

#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum Command {
    /// Enroll this account on a new device. Uses the configured account number and PIN.
    Register {
        #[arg(long)]
        identification: String,
        #[arg(long)]
        mobile_phone_no: String,
        #[arg(long)]
        device_brand: String,
        #[arg(long)]
        device_code: String,
        #[arg(long)]
        year: String,
        #[arg(long)]
        month: String,
        #[arg(long)]
        day: String,
    },
    /// Confirm enrollment with the OTP sent to the registered phone.
    RegisterOtp {
        #[arg(long)]
        otp: String,
    },
    /// Check whether a device id is still enrolled. Defaults to the configured one.
    CheckDevice {
        #[arg(long)]
        device_id: Option<String>,
    },
    /// List account transactions.
    Transactions {
        #[arg(long, default_value_t = 1)]
        previous_day: i64,
        #[arg(long, default_value_t = 1)]
        page_number: i64,
        #[arg(long, default_value_t = 20)]
        page_size: i64,
    },
    /// Transfer funds to another account.
    Transfer {
        #[arg(long)]
        account_to: String,
        #[arg(long)]
        bank_code: String,
        #[arg(long)]
        amount: f64,
    },
    /// Show the total available balance.
    Summary,
    /// Scan a bill barcode.
    BillScan {
        #[arg(long)]
        barcode: String,
    },
}
