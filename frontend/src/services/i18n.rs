use shared::{Category, Locale};

/// Look up a UI label for the active locale. Unknown keys fall back to
/// the key itself so missing entries stay visible.
pub fn t(locale: Locale, key: &str) -> String {
    lookup(locale, key).unwrap_or(key).to_string()
}

/// System categories resolve through their stable key; user categories
/// display the name they were created with.
pub fn category_label(locale: Locale, category: &Category) -> String {
    if category.system {
        if let Some(label) = lookup(locale, &format!("categories.{}", category.key)) {
            return label.to_string();
        }
    }
    category.name.clone()
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    match locale {
        Locale::En => lookup_en(key),
        Locale::PtBr => lookup_pt_br(key),
    }
}

fn lookup_en(key: &str) -> Option<&'static str> {
    Some(match key {
        "common.appName" => "Life Manager",
        "common.logout" => "Logout",
        "common.dashboard" => "Dashboard",
        "common.transactions" => "Transactions",
        "common.loading" => "Loading...",
        "common.items" => "items",
        "auth.createAccount" => "Create an account",
        "auth.signInToAccount" => "Sign in to your account",
        "auth.yourEmail" => "Your email",
        "auth.password" => "Password",
        "auth.confirmPassword" => "Confirm password",
        "auth.signIn" => "Sign in",
        "auth.createAccountButton" => "Create an account",
        "auth.alreadyHaveAccount" => "Already have an account?",
        "auth.loginHere" => "Login here",
        "auth.dontHaveAccount" => "Don't have an account?",
        "auth.signUp" => "Sign up",
        "auth.signingIn" => "Signing in...",
        "auth.creatingAccount" => "Creating account...",
        "auth.emailRequired" => "Email is required",
        "auth.emailInvalid" => "Invalid email address",
        "auth.passwordRequired" => "Password is required",
        "auth.passwordMinLength" => "Password must be at least 6 characters",
        "auth.passwordConfirmRequired" => "Password confirmation is required",
        "auth.passwordsDoNotMatch" => "Passwords do not match",
        "dashboard.title" => "Welcome to your dashboard",
        "dashboard.body" => "This is your home base. Financial tracking features are coming soon.",
        "dashboard.openTransactions" => "Open transactions",
        "transactions.title" => "Transactions",
        "transactions.subtitle" => "Track your income and expenses in one place.",
        "transactions.addTransaction" => "Add transaction",
        "transactions.newTransaction" => "New transaction",
        "transactions.noTransactions" => {
            "No transactions yet. Add your first entry with the button above."
        }
        "transactions.amount" => "Amount",
        "transactions.actions" => "Actions",
        "transactions.kind" => "Kind",
        "transactions.description" => "Description",
        "transactions.category" => "Category",
        "transactions.uncategorized" => "Uncategorized",
        "transactions.categoryPlaceholder" => "Select a category",
        "transactions.createCategory" => "Create category",
        "transactions.manageCategories" => "Manage categories",
        "transactions.categoryName" => "Name",
        "transactions.categoryColor" => "Color",
        "transactions.categoryIcon" => "Icon",
        "transactions.saveCategory" => "Save category",
        "transactions.savingCategory" => "Saving category...",
        "transactions.editCategory" => "Edit",
        "transactions.deleteCategory" => "Delete",
        "transactions.deleteTransactionTooltip" => "Delete transaction",
        "transactions.deleteCategoryTooltip" => "Delete category",
        "transactions.systemCategory" => "System",
        "transactions.currency" => "Currency",
        "transactions.pageLabel" => "Page",
        "transactions.pageOf" => "of",
        "transactions.previousPage" => "Previous",
        "transactions.nextPage" => "Next",
        "transactions.date" => "Date",
        "transactions.time" => "Time",
        "transactions.saving" => "Saving...",
        "transactions.income" => "Income",
        "transactions.expense" => "Expense",
        "transactions.createSuccess" => "Transaction created successfully",
        "transactions.amountRequired" => "Amount is required",
        "transactions.amountMin" => "Amount must be greater than 0",
        "transactions.dateRequired" => "Date is required",
        "transactions.timeRequired" => "Time is required",
        "transactions.categoryNameRequired" => "Name is required",
        "transactions.deleteSuccess" => "Transaction deleted successfully",
        "transactions.deleteError" => "Unable to delete transaction",
        "transactions.untitled" => "Untitled",
        "categories.food" => "Food",
        "categories.housing" => "Housing",
        "categories.transport" => "Transport",
        "categories.shopping" => "Shopping",
        "categories.education" => "Education",
        "categories.leisure" => "Leisure",
        "categories.health" => "Health",
        "categories.salary" => "Salary",
        "categories.travel" => "Travel",
        "categories.entertainment" => "Entertainment",
        "categories.investments" => "Investments",
        "categories.bills" => "Bills",
        "categories.utilities" => "Utilities",
        "categories.groceries" => "Groceries",
        "categories.coffee" => "Coffee",
        "categories.fitness" => "Fitness",
        "categories.gifts" => "Gifts",
        "categories.pets" => "Pets",
        _ => return None,
    })
}

fn lookup_pt_br(key: &str) -> Option<&'static str> {
    Some(match key {
        "common.appName" => "Life Manager",
        "common.logout" => "Sair",
        "common.dashboard" => "Dashboard",
        "common.transactions" => "Transações",
        "common.loading" => "Carregando...",
        "common.items" => "itens",
        "auth.createAccount" => "Criar uma conta",
        "auth.signInToAccount" => "Entre na sua conta",
        "auth.yourEmail" => "Seu email",
        "auth.password" => "Senha",
        "auth.confirmPassword" => "Confirme a senha",
        "auth.signIn" => "Entrar",
        "auth.createAccountButton" => "Criar uma conta",
        "auth.alreadyHaveAccount" => "Já tem uma conta?",
        "auth.loginHere" => "Entre aqui",
        "auth.dontHaveAccount" => "Não tem uma conta?",
        "auth.signUp" => "Cadastre-se",
        "auth.signingIn" => "Entrando...",
        "auth.creatingAccount" => "Criando conta...",
        "auth.emailRequired" => "Email é obrigatório",
        "auth.emailInvalid" => "Endereço de email inválido",
        "auth.passwordRequired" => "Senha é obrigatória",
        "auth.passwordMinLength" => "A senha deve ter pelo menos 6 caracteres",
        "auth.passwordConfirmRequired" => "Confirmação de senha é obrigatória",
        "auth.passwordsDoNotMatch" => "As senhas não coincidem",
        "dashboard.title" => "Bem-vindo ao seu dashboard",
        "dashboard.body" => {
            "Esta é a sua base. Recursos de controle financeiro chegam em breve."
        }
        "dashboard.openTransactions" => "Abrir transações",
        "transactions.title" => "Transações",
        "transactions.subtitle" => "Acompanhe suas receitas e despesas em um só lugar.",
        "transactions.addTransaction" => "Adicionar transação",
        "transactions.newTransaction" => "Nova transação",
        "transactions.noTransactions" => {
            "Nenhuma transação ainda. Adicione a primeira com o botão acima."
        }
        "transactions.amount" => "Valor",
        "transactions.actions" => "Ações",
        "transactions.kind" => "Tipo",
        "transactions.description" => "Descrição",
        "transactions.category" => "Categoria",
        "transactions.uncategorized" => "Sem categoria",
        "transactions.categoryPlaceholder" => "Selecione uma categoria",
        "transactions.createCategory" => "Criar categoria",
        "transactions.manageCategories" => "Gerenciar categorias",
        "transactions.categoryName" => "Nome",
        "transactions.categoryColor" => "Cor",
        "transactions.categoryIcon" => "Ícone",
        "transactions.saveCategory" => "Salvar categoria",
        "transactions.savingCategory" => "Salvando categoria...",
        "transactions.editCategory" => "Editar",
        "transactions.deleteCategory" => "Excluir",
        "transactions.deleteTransactionTooltip" => "Excluir transação",
        "transactions.deleteCategoryTooltip" => "Excluir categoria",
        "transactions.systemCategory" => "Sistema",
        "transactions.currency" => "Moeda",
        "transactions.pageLabel" => "Página",
        "transactions.pageOf" => "de",
        "transactions.previousPage" => "Anterior",
        "transactions.nextPage" => "Próxima",
        "transactions.date" => "Data",
        "transactions.time" => "Hora",
        "transactions.saving" => "Salvando...",
        "transactions.income" => "Receita",
        "transactions.expense" => "Despesa",
        "transactions.createSuccess" => "Transação criada com sucesso",
        "transactions.amountRequired" => "Valor é obrigatório",
        "transactions.amountMin" => "O valor deve ser maior que 0",
        "transactions.dateRequired" => "Data é obrigatória",
        "transactions.timeRequired" => "Hora é obrigatória",
        "transactions.categoryNameRequired" => "Nome é obrigatório",
        "transactions.deleteSuccess" => "Transação excluída com sucesso",
        "transactions.deleteError" => "Não foi possível excluir a transação",
        "transactions.untitled" => "Sem título",
        "categories.food" => "Alimentação",
        "categories.housing" => "Moradia",
        "categories.transport" => "Transporte",
        "categories.shopping" => "Compras",
        "categories.education" => "Educação",
        "categories.leisure" => "Lazer",
        "categories.health" => "Saúde",
        "categories.salary" => "Salário",
        "categories.travel" => "Viagem",
        "categories.entertainment" => "Entretenimento",
        "categories.investments" => "Investimentos",
        "categories.bills" => "Contas",
        "categories.utilities" => "Serviços",
        "categories.groceries" => "Mercado",
        "categories.coffee" => "Café",
        "categories.fitness" => "Academia",
        "categories.gifts" => "Presentes",
        "categories.pets" => "Pets",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn system_category(key: &str, name: &str) -> Category {
        Category {
            id: "cat-1".to_string(),
            name: name.to_string(),
            color: "#22C55E".to_string(),
            icon: "food".to_string(),
            system: true,
            key: key.to_string(),
        }
    }

    #[wasm_bindgen_test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::En, "nope.missing"), "nope.missing");
    }

    #[wasm_bindgen_test]
    fn test_system_category_label_is_localized() {
        let category = system_category("food", "Food");
        assert_eq!(category_label(Locale::PtBr, &category), "Alimentação");
        assert_eq!(category_label(Locale::En, &category), "Food");
    }

    #[wasm_bindgen_test]
    fn test_user_category_label_keeps_name() {
        let mut category = system_category("food", "My Food");
        category.system = false;
        assert_eq!(category_label(Locale::PtBr, &category), "My Food");
    }
}
