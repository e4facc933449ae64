pub struct Env {
    pub database_url: String,
    pub frontend_url: String,
    pub ip: String,
    pub port: u16,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from_email: String,
    pub contact_email: String,
    pub upload_dir: String,
    pub upload_base_url: String,
    pub max_upload_bytes: usize,
}

impl Env {
    fn new() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set in .env file or environment variable");

        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");

        let smtp_host = std::env::var("SMTP_HOST")
            .expect("SMTP_HOST must be set in .env file or environment variable");
        let smtp_port = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse::<u16>()
            .expect("SMTP_PORT must be a valid u16 integer");
        let smtp_username = std::env::var("SMTP_USERNAME")
            .expect("SMTP_USERNAME must be set in .env file or environment variable");
        let smtp_password = std::env::var("SMTP_PASSWORD")
            .expect("SMTP_PASSWORD must be set in .env file or environment variable");
        let from_email = std::env::var("FROM_EMAIL")
            .expect("FROM_EMAIL must be set in .env file or environment variable");
        // contact form submissions go back to the site owner by default
        let contact_email = std::env::var("CONTACT_EMAIL").unwrap_or_else(|_| from_email.clone());

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string());
        let upload_base_url =
            std::env::var("UPLOAD_BASE_URL").unwrap_or_else(|_| "/uploads".to_string());
        let max_upload_bytes = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
            .parse::<usize>()
            .expect("MAX_UPLOAD_BYTES must be a valid usize integer");

        Env {
            database_url,
            frontend_url,
            ip,
            port,
            smtp_host,
            smtp_port,
            smtp_username,
            smtp_password,
            from_email,
            contact_email,
            upload_dir,
            upload_base_url,
            max_upload_bytes,
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
