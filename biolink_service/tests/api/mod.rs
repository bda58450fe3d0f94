mod test_admin;
mod test_auth;
mod test_health;
mod test_superadmin;
